use {
    serde::{Serialize, Serializer},
    std::collections::HashSet,
};

const BUILTIN: &[ServiceListing] = &[
    ServiceListing {
        id: "startup-security-package",
        title: "Startup Security Package",
        description: "Complete security solution designed for early-stage startups.",
        category: "security",
        price: Price::from_cents(4999_00),
    },
    ServiceListing {
        id: "full-stack-web-application",
        title: "Full-Stack Web Application",
        description: "Custom web application development with frontend and backend components.",
        category: "development",
        price: Price::from_cents(9999_00),
    },
];

/// A monetary amount held as whole cents.
///
/// Serializes as a JSON number in currency units, so `499900` cents is written as `4999.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // f64 is exact only up to 2^53 cents.
        debug_assert!(self.0 <= 1 << 53, "price of {} cents loses precision", self.0);

        serializer.serialize_f64(self.0 as f64 / 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ServiceListing {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub price: Price,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("listing #{index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },

    #[error("listing id `{0}` appears more than once")]
    DuplicateId(&'static str),
}

/// The immutable set of offerings served by `/api/services`.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: &'static [ServiceListing],
}

impl Catalog {
    pub fn new(listings: &'static [ServiceListing]) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());

        for (index, listing) in listings.iter().enumerate() {
            let fields = [
                ("id", listing.id),
                ("title", listing.title),
                ("description", listing.description),
                ("category", listing.category),
            ];

            if let Some(&(field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
                return Err(CatalogError::EmptyField { index, field });
            }

            if !seen.insert(listing.id) {
                return Err(CatalogError::DuplicateId(listing.id));
            }
        }

        Ok(Self { listings })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(BUILTIN)
    }

    pub fn listings(&self) -> &'static [ServiceListing] {
        self.listings
    }
}
