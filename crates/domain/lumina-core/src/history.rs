use crate::Product;

/// Month labels for the six-point trend series, oldest first.
pub const HISTORY_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Seasonal shape applied to the current price, oldest first. The final
/// point is the price as listed today.
const BASE_RATIOS: [f64; 6] = [1.12, 1.08, 1.15, 1.04, 0.97, 1.0];

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub label: &'static str,
    pub price: f64,
}

/// Six months of pricing for a product. The offsets are derived from the
/// product id so the series is stable across renders and processes.
pub fn price_history(product: &Product) -> Vec<PricePoint> {
    HISTORY_LABELS
        .into_iter()
        .zip(BASE_RATIOS)
        .enumerate()
        .map(|(i, (label, ratio))| {
            // Spread in [-10, 10), zero for the newest point.
            let jitter = if i + 1 == HISTORY_LABELS.len() {
                0.0
            } else {
                let h = fnv1a_64(&format!("{}/{label}", product.id));
                (h % 2000) as f64 / 100.0 - 10.0
            };
            PricePoint {
                label,
                price: ((product.price * ratio + jitter).max(1.0) * 100.0).round() / 100.0,
            }
        })
        .collect()
}

fn fnv1a_64(s: &str) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in s.as_bytes() {
        h ^= *b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: "Test".to_string(),
            category: Category::Home,
            price,
            rating: 4.0,
            reviews: 1,
            image: String::new(),
            description: String::new(),
            features: vec![],
        }
    }

    #[test]
    fn series_is_deterministic_per_product() {
        let p = product("p-001", 100.0);
        assert_eq!(price_history(&p), price_history(&p));
    }

    #[test]
    fn series_has_six_points_and_ends_at_list_price() {
        let p = product("p-002", 249.0);
        let series = price_history(&p);
        assert_eq!(series.len(), 6);
        assert_eq!(series[5].price, 249.0);
    }

    #[test]
    fn different_products_get_different_offsets() {
        let a = price_history(&product("p-001", 100.0));
        let b = price_history(&product("p-002", 100.0));
        assert_ne!(a, b);
    }
}
