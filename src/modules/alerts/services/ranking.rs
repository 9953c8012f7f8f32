use crate::modules::catalog::models::Product;

/// Ordering strategy for alternative-product candidates
///
/// Candidates arrive already filtered to in-stock, same-category peers in
/// catalog order. A ranker reorders them; the alert service then truncates
/// to the requested maximum. Smarter matching (sales rank, price proximity)
/// can be substituted without touching the cart or invoice contracts.
pub trait AlternativeRanker: Send + Sync {
    fn rank(&self, candidates: Vec<Product>) -> Vec<Product>;
}

/// Default ranker: first-match-wins in catalog order
pub struct CatalogOrderRanker;

impl AlternativeRanker for CatalogOrderRanker {
    fn rank(&self, candidates: Vec<Product>) -> Vec<Product> {
        candidates
    }
}

/// Ranks cheapest-first; ties keep catalog order
pub struct PriceAscendingRanker;

impl AlternativeRanker for PriceAscendingRanker {
    fn rank(&self, mut candidates: Vec<Product>) -> Vec<Product> {
        candidates.sort_by(|a, b| a.price.cmp(&b.price));
        candidates
    }
}
