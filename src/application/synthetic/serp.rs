use super::title_case;
use crate::domain::entities::ranking_page::{PageCandidate, FIRST_PAGE_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Share of synthetic positions filled by a directory listing.
pub const DIRECTORY_PROBABILITY: f64 = 0.4;

const DIRECTORY_SITES: &[(&str, &str)] = &[
    ("yelp.com", "Yelp"),
    ("bbb.org", "BBB"),
    ("angieslist.com", "Angie's List"),
    ("yellowpages.com", "Yellow Pages"),
    ("thumbtack.com", "Thumbtack"),
];

const LOCAL_BUSINESSES: &[&str] = &[
    "localplumbingpros.com",
    "cityroofingexperts.com",
    "bestcontractors.net",
    "affordablehvac.com",
    "qualityserviceco.com",
    "premiumlawyers.com",
];

/// Generate a full first page for `keyword`, ranks 1 through 10.
///
/// Each position is independently a directory listing (high authority and
/// backlinks) or a small local business (low authority and backlinks).
pub fn generate_serp<R: Rng + ?Sized>(keyword: &str, rng: &mut R) -> Vec<PageCandidate> {
    let keyword = keyword.trim();
    let display = title_case(keyword);
    let query = keyword.split_whitespace().collect::<Vec<_>>().join("+");

    (1..=FIRST_PAGE_SIZE as u32)
        .map(|rank| {
            if rng.gen_bool(DIRECTORY_PROBABILITY) {
                let (domain, name) = DIRECTORY_SITES
                    .choose(&mut *rng)
                    .copied()
                    .unwrap_or(("yelp.com", "Yelp"));
                PageCandidate {
                    rank,
                    domain: domain.to_string(),
                    url: format!("https://www.{domain}/search?q={query}"),
                    title: format!("{name} - Find {display} Near You"),
                    description: Some(format!(
                        "Find the best {keyword} services. Read reviews, compare prices, and get quotes."
                    )),
                    domain_rank: Some(rng.gen_range(70..=95)),
                    backlinks: Some(rng.gen_range(10_000..=500_000)),
                }
            } else {
                let domain = LOCAL_BUSINESSES
                    .choose(&mut *rng)
                    .copied()
                    .unwrap_or("localplumbingpros.com");
                let brand = title_case(domain.split('.').next().unwrap_or(domain));
                PageCandidate {
                    rank,
                    domain: domain.to_string(),
                    url: format!("https://www.{domain}/"),
                    title: format!("Best {display} Services | {brand}"),
                    description: Some(format!(
                        "Professional {keyword} services. Licensed and insured. Call for free quote."
                    )),
                    domain_rank: Some(rng.gen_range(10..=45)),
                    backlinks: Some(rng.gen_range(5..=200)),
                }
            }
        })
        .collect()
}
