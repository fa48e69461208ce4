use chrono::{Duration, NaiveDate, Utc};
use common::Bar;
use rand::Rng;

fn start_date(days: usize) -> NaiveDate {
    Utc::now().date_naive() - Duration::days(days as i64)
}

/// Generate random-walk daily bars for testing
pub fn generate_synthetic_bars(days: usize, initial_price: f64) -> Vec<Bar> {
    let mut rng = rand::thread_rng();
    let mut bars = Vec::with_capacity(days);

    let mut price = initial_price;
    let start = start_date(days);

    let daily_volatility = 0.02;
    let drift = 0.0002;

    for i in 0..days {
        let date = start + Duration::days(i as i64);

        let random_return: f64 = rng.gen_range(-1.0..1.0);
        let daily_return = drift + daily_volatility * random_return;
        let new_price = price * (1.0 + daily_return);

        let intraday_range = price * rng.gen_range(0.005..0.02);
        let open = price + rng.gen_range(-intraday_range / 2.0..intraday_range / 2.0);
        let close = new_price;
        let high = open.max(close) + rng.gen_range(0.0..intraday_range / 2.0);
        let low = (open.min(close) - rng.gen_range(0.0..intraday_range / 2.0)).max(0.01);

        // heavier volume on volatile days
        let base_volume = 1_000_000.0;
        let volume = base_volume * (1.0 + daily_return.abs() * 10.0) * rng.gen_range(0.8..1.2);

        bars.push(Bar::new(date, open, high, low, close, volume));

        price = new_price;
    }

    bars
}

/// Generate a deterministic uptrend: the close rises by 1.0 each day,
/// open = low = close - 0.5, high = close + 0.5
pub fn generate_uptrend_bars(days: usize, start_close: f64) -> Vec<Bar> {
    let start = start_date(days);
    (0..days)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            let close = start_close + i as f64;
            Bar::new(date, close - 0.5, close + 0.5, close - 0.5, close, 1000.0)
        })
        .collect()
}

/// Generate identical bars with a fixed intraday range around `price`
pub fn generate_flat_bars(days: usize, price: f64) -> Vec<Bar> {
    let start = start_date(days);
    (0..days)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            Bar::new(date, price, price + 0.5, price - 0.5, price, 1000.0)
        })
        .collect()
}
