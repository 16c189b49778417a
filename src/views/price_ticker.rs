use std::io::{self, Write};
use std::time::Duration;

use tokio::time::sleep;

use crate::utils::format;
use crate::views::result_view::PRICE_LABEL;

pub const ANIMATION_MS: u64 = 1500;
pub const STEPS: u64 = 50;

/// Discrete frames of the 0 → price count-up. Intermediate frames are the
/// grouped floor of a linear interpolation; the last frame is exactly the
/// grouped final price.
pub fn frames(price: f64) -> Vec<String> {
    let step_value = price / STEPS as f64;
    (1..=STEPS)
        .map(|step| {
            if step == STEPS {
                format::group_price(price)
            } else {
                format::group_price((step_value * step as f64).floor())
            }
        })
        .collect()
}

/// Replay the count-up in place on stdout, leaving the final price on
/// its own line. Cosmetic only.
pub async fn play(price: f64) {
    let interval = Duration::from_millis(ANIMATION_MS / STEPS);
    for frame in frames(price) {
        print!("\r{}{}", PRICE_LABEL, frame);
        let _ = io::stdout().flush();
        sleep(interval).await;
    }
    println!();
}
