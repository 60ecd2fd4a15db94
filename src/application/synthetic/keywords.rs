use super::round2;
use crate::domain::entities::keyword_metrics::KeywordMetrics;
use crate::domain::values::market_params::MarketParams;
use rand::seq::SliceRandom;
use rand::Rng;

pub const CITIES: &[&str] = &[
    "phoenix",
    "new york",
    "los angeles",
    "chicago",
    "houston",
    "miami",
    "seattle",
    "denver",
    "atlanta",
    "dallas",
];

pub const SERVICES: &[&str] = &[
    "plumber",
    "roofing",
    "hvac",
    "electrician",
    "lawyer",
    "dentist",
    "contractor",
    "landscaping",
    "pool service",
    "tree service",
];

/// Generate `params.limit` keyword records around `seed`.
///
/// Volume is uniform over the volume window, CPC uniform over
/// `[min_cpc, min_cpc * 5]` (capped at `max_cpc` when set) and competition
/// uniform over `[0.2, 0.9]`. Keywords pair a service with a city; when the
/// pairing does not mention the seed it becomes `"{seed} {city}"`.
pub fn generate_keywords<R: Rng + ?Sized>(
    seed: &str,
    params: &MarketParams,
    rng: &mut R,
) -> Vec<KeywordMetrics> {
    let seed = seed.trim();
    let seed_lower = seed.to_lowercase();

    let vol_lo = params.min_volume.min(params.max_volume);
    let vol_hi = params.min_volume.max(params.max_volume);

    let cpc_lo = sanitize_cpc(params.min_cpc);
    let mut cpc_hi = (cpc_lo * 5.0).min(f64::MAX);
    if let Some(max) = params.max_cpc {
        if max.is_finite() && max >= cpc_lo {
            cpc_hi = cpc_hi.min(max);
        }
    }
    // rand rejects float ranges whose scaled width overflows.
    if !((cpc_hi - cpc_lo) * 2.0).is_finite() {
        cpc_hi = cpc_lo;
    }

    (0..params.limit)
        .filter_map(|_| {
            let city = CITIES.choose(&mut *rng).copied().unwrap_or("phoenix");
            let service = SERVICES.choose(&mut *rng).copied().unwrap_or("plumber");

            let mut keyword = if rng.gen_bool(0.5) {
                format!("{service} {city}")
            } else {
                format!("{city} {service}")
            };
            if !keyword.contains(&seed_lower) {
                keyword = format!("{seed} {city}");
            }

            let cpc = round2(rng.gen_range(cpc_lo..=cpc_hi)).clamp(cpc_lo, cpc_hi);
            let search_volume = rng.gen_range(vol_lo..=vol_hi);
            let competition = round2(rng.gen_range(0.2..=0.9));
            let advertiser_competition = round2(rng.gen_range(0.3..=0.95));
            KeywordMetrics::new(
                keyword,
                search_volume,
                cpc,
                competition,
                Some(advertiser_competition),
            )
            .ok()
        })
        .collect()
}

fn sanitize_cpc(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_limit_records_in_window() {
        let params = MarketParams {
            limit: 40,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let kws = generate_keywords("plumber", &params, &mut rng);
        assert_eq!(kws.len(), 40);
        for k in &kws {
            assert!((200..=1200).contains(&k.search_volume));
            assert!(k.cpc >= 10.0 && k.cpc <= 50.0, "cpc {}", k.cpc);
            assert!((0.2..=0.9).contains(&k.competition));
            assert!(k.keyword.contains("plumber"));
        }
    }

    #[test]
    fn test_unknown_seed_prefixes_city() {
        let params = MarketParams {
            limit: 10,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        for k in generate_keywords("Solar Installer", &params, &mut rng) {
            assert!(k.keyword.starts_with("Solar Installer "));
            let city = k.keyword.trim_start_matches("Solar Installer ");
            assert!(CITIES.contains(&city));
        }
    }

    #[test]
    fn test_respects_max_cpc() {
        let params = MarketParams {
            min_cpc: 10.0,
            max_cpc: Some(12.0),
            limit: 50,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_keywords("hvac", &params, &mut rng)
            .iter()
            .all(|k| k.cpc <= 12.0));
    }

    #[test]
    fn test_degenerate_windows_do_not_panic() {
        let params = MarketParams {
            min_volume: 0,
            max_volume: 0,
            min_cpc: 0.0,
            limit: 3,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(4);
        let kws = generate_keywords("dentist", &params, &mut rng);
        assert_eq!(kws.len(), 3);
        assert!(kws.iter().all(|k| k.search_volume == 0 && k.cpc == 0.0));
    }

    #[test]
    fn test_same_seed_same_output() {
        let params = MarketParams::default();
        let a = generate_keywords("roofing", &params, &mut StdRng::seed_from_u64(9));
        let b = generate_keywords("roofing", &params, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_extreme_cpc_floor_does_not_panic() {
        for min_cpc in [1e308, f64::MAX, 3.6e307] {
            let params = MarketParams {
                min_cpc,
                limit: 3,
                ..Default::default()
            };
            let mut rng = StdRng::seed_from_u64(4);
            let kws = generate_keywords("plumber", &params, &mut rng);
            assert_eq!(kws.len(), 3);
            assert!(kws.iter().all(|k| k.cpc.is_finite() && k.cpc >= min_cpc));
        }
    }

    #[test]
    fn test_records_pass_validation() {
        let mut rng = StdRng::seed_from_u64(5);
        for k in generate_keywords("roofing", &MarketParams::default(), &mut rng) {
            assert!(KeywordMetrics::new(
                k.keyword.clone(),
                k.search_volume,
                k.cpc,
                k.competition,
                k.advertiser_competition
            )
            .is_ok());
        }
    }
}
