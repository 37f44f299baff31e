//! Industry registry for discovering supported industries and their tracks.
//!
//! This module lists every industry the questionnaire offers, the
//! sub-categories shown for each, and the valuation track it routes to.

use bizval_traits::IndustryTrack;
use serde::Serialize;

/// Metadata about an industry.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryInfo {
    /// Display name, as submitted by the questionnaire.
    pub name: &'static str,

    /// Valuation track this industry routes to.
    pub track: IndustryTrack,

    /// Sub-categories offered for this industry.
    pub sub_categories: &'static [&'static str],
}

impl IndustryInfo {
    /// Whether `sub_category` is one of this industry's options.
    #[must_use]
    pub fn has_sub_category(&self, sub_category: &str) -> bool {
        let wanted = sub_category.trim();
        self.sub_categories
            .iter()
            .any(|s| s.eq_ignore_ascii_case(wanted))
    }
}

const fn industry(
    name: &'static str,
    track: IndustryTrack,
    sub_categories: &'static [&'static str],
) -> IndustryInfo {
    IndustryInfo {
        name,
        track,
        sub_categories,
    }
}

/// Get information about all supported industries, in questionnaire order.
#[must_use]
pub fn available_industries() -> Vec<IndustryInfo> {
    use IndustryTrack::{Ecommerce, Generic, Trade};

    vec![
        industry(
            "Trade Business",
            Trade,
            &[
                "Plumbing",
                "Electrical",
                "Building & Construction",
                "HVAC",
                "Landscaping",
                "Painting",
                "Roofing",
                "Carpentry",
                "Handyman",
                "Pest Control",
                "Cleaning",
            ],
        ),
        industry(
            "E-commerce",
            Ecommerce,
            &[
                "Fashion & Apparel",
                "Electronics",
                "Home Goods",
                "Health & Beauty",
                "Food & Beverage",
                "Pet Supplies",
                "Digital Products",
                "Subscription Boxes",
                "Dropshipping",
            ],
        ),
        industry(
            "Technology",
            Generic,
            &[
                "SaaS",
                "Mobile App",
                "IT Services",
                "Web Development & Design",
                "Cybersecurity",
                "AI & Machine Learning",
                "Fintech",
                "Edutech",
                "Healthtech",
            ],
        ),
        industry(
            "Manufacturing",
            Generic,
            &[
                "Food & Beverage",
                "Clothing & Textiles",
                "Furniture",
                "Electronics",
                "Machinery & Equipment",
                "Chemical",
                "Automotive Parts",
                "Plastics & Rubber",
            ],
        ),
        industry(
            "Professional Services",
            Generic,
            &[
                "Accounting & Bookkeeping",
                "Legal Services",
                "Marketing & Advertising",
                "Consulting",
                "Architecture & Engineering",
                "Real Estate Services",
                "Financial Advisory",
            ],
        ),
        industry(
            "Retail",
            Generic,
            &[
                "Fashion Boutique",
                "Cafe/Coffee Shop",
                "Restaurant",
                "Bar/Pub",
                "Convenience Store",
                "Specialty Food Store",
                "Gift Shop",
                "Bookstore",
                "Hair & Beauty Salon",
            ],
        ),
        industry(
            "Healthcare",
            Generic,
            &[
                "Medical Practice (GP)",
                "Dental Clinic",
                "Physiotherapy",
                "Chiropractic",
                "Pharmacy",
                "Allied Health",
                "Veterinary Clinic",
            ],
        ),
        industry(
            "Food & Beverage",
            Generic,
            &[
                "Restaurant",
                "Cafe",
                "Bar/Pub",
                "Catering",
                "Food Truck",
                "Bakery",
                "Brewery/Distillery",
                "Packaged Food Production",
            ],
        ),
        industry(
            "Construction",
            Generic,
            &[
                "Residential Construction",
                "Commercial Construction",
                "Civil Engineering",
                "Renovation & Remodeling",
                "Architectural Services",
                "Trade Services",
            ],
        ),
        industry(
            "Transportation",
            Generic,
            &[
                "Logistics & Freight",
                "Taxi & Ride-sharing",
                "Trucking",
                "Courier Services",
                "Moving Services",
                "Bus & Coach Services",
            ],
        ),
        industry(
            "Education",
            Generic,
            &[
                "Childcare Centre",
                "Tutoring Services",
                "Registered Training Organisation (RTO)",
                "Online Course Provider",
                "Educational Resources",
            ],
        ),
        industry(
            "Real Estate",
            Generic,
            &[
                "Sales Agency",
                "Property Management",
                "Buyer's Agency",
                "Commercial Real Estate",
                "Strata Management",
            ],
        ),
        industry(
            "Finance",
            Generic,
            &[
                "Financial Planning/Advisory",
                "Mortgage Broking",
                "Insurance Broking",
                "Accounting Firm",
                "Bookkeeping Service",
            ],
        ),
        industry("Other", Generic, &[]),
    ]
}

/// Get all industries routed to a specific track.
#[must_use]
pub fn industries_by_track(track: IndustryTrack) -> Vec<IndustryInfo> {
    available_industries()
        .into_iter()
        .filter(|info| info.track == track)
        .collect()
}

/// Get information about a specific industry by name, ignoring case.
#[must_use]
pub fn get_industry_info(name: &str) -> Option<IndustryInfo> {
    let wanted = name.trim();
    available_industries()
        .into_iter()
        .find(|info| info.name.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_industries() {
        let industries = available_industries();
        assert_eq!(industries.len(), 14);
        assert_eq!(industries[0].name, "Trade Business");
        assert_eq!(industries[13].name, "Other");
        assert!(industries[13].sub_categories.is_empty());
    }

    #[test]
    fn test_industries_by_track() {
        assert_eq!(industries_by_track(IndustryTrack::Trade).len(), 1);
        assert_eq!(industries_by_track(IndustryTrack::Ecommerce).len(), 1);
        assert_eq!(industries_by_track(IndustryTrack::Generic).len(), 12);
    }

    #[test]
    fn test_get_industry_info() {
        let info = get_industry_info("healthcare").unwrap();
        assert_eq!(info.name, "Healthcare");
        assert_eq!(info.track, IndustryTrack::Generic);
        assert!(info.has_sub_category("Dental Clinic"));
        assert!(!info.has_sub_category("Plumbing"));

        assert!(get_industry_info("Space Mining").is_none());
    }

    #[test]
    fn test_registry_agrees_with_routing() {
        for info in available_industries() {
            assert_eq!(
                IndustryTrack::from_category(info.name),
                info.track,
                "{} routes differently",
                info.name
            );
        }
    }
}
