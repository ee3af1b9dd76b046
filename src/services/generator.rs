use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};

use crate::models::{PlanType, Platform, SubscriptionRecord};

/// Shape of one (platform, plan) segment: starting subscriber base,
/// daily flow levels and the effective monthly price per subscriber.
struct SegmentProfile {
    platform: Platform,
    plan_type: PlanType,
    base: f64,
    new_level: f64,
    cancel_level: f64,
    trial_level: f64,
    conversion_floor: f64,
    conversion_spread: f64,
    monthly_price: f64,
}

fn segment_profiles() -> Vec<SegmentProfile> {
    vec![
        SegmentProfile {
            platform: Platform::Ios,
            plan_type: PlanType::Monthly,
            base: 1200.0,
            new_level: 40.0,
            cancel_level: 15.0,
            trial_level: 60.0,
            conversion_floor: 0.25,
            conversion_spread: 0.15,
            monthly_price: 9.99,
        },
        SegmentProfile {
            platform: Platform::Ios,
            plan_type: PlanType::Yearly,
            base: 800.0,
            new_level: 25.0,
            cancel_level: 8.0,
            trial_level: 40.0,
            conversion_floor: 0.35,
            conversion_spread: 0.15,
            // Yearly revenue normalized to a monthly figure.
            monthly_price: 99.99 / 12.0,
        },
        SegmentProfile {
            platform: Platform::Android,
            plan_type: PlanType::Monthly,
            base: 900.0,
            new_level: 35.0,
            cancel_level: 12.0,
            trial_level: 50.0,
            conversion_floor: 0.22,
            conversion_spread: 0.12,
            monthly_price: 8.99,
        },
        SegmentProfile {
            platform: Platform::Android,
            plan_type: PlanType::Yearly,
            base: 600.0,
            new_level: 20.0,
            cancel_level: 6.0,
            trial_level: 35.0,
            conversion_floor: 0.30,
            conversion_spread: 0.15,
            monthly_price: 89.99 / 12.0,
        },
    ]
}

/// Generate `days` days of synthetic history ending today, one record
/// per (platform, plan) segment per day.
///
/// The series carries the texture a real subscription business shows:
/// weekend dips in signups and trials, a gradual growth trend, rare
/// acquisition spikes, multiplicative noise, and subscriber bases that
/// drift by daily net adds.
pub fn generate_subscription_data(days: u32) -> Vec<SubscriptionRecord> {
    let today = Utc::now().date_naive();
    let mut profiles = segment_profiles();
    let mut data = Vec::with_capacity(days as usize * profiles.len());

    for offset in (0..i64::from(days)).rev() {
        let date = today - Duration::days(offset);

        let weekend_factor = if is_weekend(date) { 0.7 } else { 1.0 };
        let elapsed = f64::from(days) - offset as f64;
        let growth_factor = 1.0 + (elapsed / f64::from(days)) * 0.3;
        // Rare acquisition spike (launch feature, promo, press).
        let spike_factor = if rand::random::<f64>() < 0.05 {
            1.5 + rand::random::<f64>() * 0.5
        } else {
            1.0
        };
        let noise = 0.9 + rand::random::<f64>() * 0.2;

        for profile in profiles.iter_mut() {
            data.push(daily_record(profile, date, weekend_factor, growth_factor, spike_factor, noise));
        }
    }

    data
}

fn daily_record(
    profile: &mut SegmentProfile,
    date: NaiveDate,
    weekend_factor: f64,
    growth_factor: f64,
    spike_factor: f64,
    noise: f64,
) -> SubscriptionRecord {
    let active = (profile.base * growth_factor * noise).floor() as u32;
    let new = (profile.new_level * weekend_factor * spike_factor * noise).floor() as u32;
    let cancellations = (profile.cancel_level * noise).floor() as u32;
    let trials = (profile.trial_level * weekend_factor * spike_factor * noise).floor() as u32;
    let conversion_rate = profile.conversion_floor + rand::random::<f64>() * profile.conversion_spread;
    let conversions = (f64::from(trials) * conversion_rate).floor() as u32;

    // Net adds feed the next day's base.
    profile.base += f64::from(new) - f64::from(cancellations);

    SubscriptionRecord {
        date,
        platform: profile.platform,
        plan_type: profile.plan_type,
        active_subscriptions: active,
        new_subscriptions: new,
        cancellations,
        mrr: f64::from(active) * profile.monthly_price,
        total_trials: trials,
        trial_conversions: conversions,
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_four_segments_per_day() {
        let data = generate_subscription_data(30);
        assert_eq!(data.len(), 30 * 4);

        let first_day = data[0].date;
        let segments: Vec<_> = data.iter().filter(|r| r.date == first_day).collect();
        assert_eq!(segments.len(), 4);
    }

    #[test]
    fn test_history_ends_today_and_spans_requested_days() {
        let data = generate_subscription_data(90);
        let today = Utc::now().date_naive();

        assert_eq!(data.last().unwrap().date, today);
        assert_eq!(data.first().unwrap().date, today - Duration::days(89));
    }

    #[test]
    fn test_mrr_follows_segment_price() {
        let data = generate_subscription_data(7);

        for record in data.iter().filter(|r| {
            r.platform == Platform::Ios && r.plan_type == PlanType::Monthly
        }) {
            let expected = f64::from(record.active_subscriptions) * 9.99;
            assert!((record.mrr - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_conversions_never_exceed_trials() {
        let data = generate_subscription_data(90);
        for record in &data {
            assert!(record.trial_conversions <= record.total_trials);
        }
    }
}
