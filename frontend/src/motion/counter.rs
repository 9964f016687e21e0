use rand::Rng;

/// 0 at `t = 0`, 1 at `t >= 1`, fast start and long tail.
pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else if t <= 0.0 {
        0.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

/// Counter value `elapsed_ms` into a count-up lasting `duration_ms`.
pub fn count_up(end: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return end;
    }
    let eased = ease_out_expo(elapsed_ms / duration_ms);
    (f64::from(end) * eased).floor() as u32
}

/// `1500` -> `"1,500"`.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Replaces the digits of `target` that are not yet locked with random
/// ones. Digits lock left to right as `progress` goes from 0 to 1;
/// separators are never scrambled.
pub fn scramble_digits<R: Rng + ?Sized>(target: &str, progress: f64, rng: &mut R) -> String {
    let len = target.chars().count();
    let locked = progress.clamp(0.0, 1.0) * len as f64;
    target
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if !ch.is_ascii_digit() || (i as f64) < locked {
                ch
            } else {
                char::from(b'0' + rng.gen_range(0..10u8))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn easing_is_bounded_and_increasing() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        let mut last = 0.0;
        for n in 1..=100 {
            let v = ease_out_expo(n as f64 / 100.0);
            assert!(v >= last && v <= 1.0);
            last = v;
        }
    }

    #[test]
    fn count_up_finishes_exactly() {
        assert_eq!(count_up(1500, 0.0, 2000.0), 0);
        assert!(count_up(1500, 1000.0, 2000.0) > 1400);
        assert_eq!(count_up(1500, 2000.0, 2000.0), 1500);
        assert_eq!(count_up(7, 50.0, 0.0), 7);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(300), "300");
        assert_eq!(format_thousands(1500), "1,500");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn scramble_keeps_shape_and_locks_left_to_right() {
        let mut rng = SmallRng::seed_from_u64(3);
        let target = "1,500";

        let early = scramble_digits(target, 0.0, &mut rng);
        assert_eq!(early.len(), target.len());
        assert_eq!(early.chars().nth(1), Some(','));
        assert!(early.chars().all(|c| c.is_ascii_digit() || c == ','));

        let half = scramble_digits(target, 0.5, &mut rng);
        assert!(half.starts_with("1,5"));

        assert_eq!(scramble_digits(target, 1.0, &mut rng), target);
    }
}
