//! Read-only data contract between the map view and whatever tracks the field.
//!
//! The view queries the provider afresh on every render pass and never caches
//! what it gets back. Accessors return owned snapshots, so a provider backed by
//! live data only has to produce a consistent copy per call.

mod memory;

use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::geo::GeoBox;
use crate::model::{Designation, Incident, Personnel};

pub use memory::InMemoryProvider;

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failure reported by a provider (unreachable store, malformed record, ...).
#[derive(Debug, Error)]
#[error("map provider failed: {message}")]
pub struct ProviderError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), source: None }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self { message: message.into(), source: Some(source.into()) }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Source of map bounds and tracked entities.
///
/// Implementors supply the `all_*` listings and the four bounds; the
/// designation-filtered listings default to filtering those, preserving order.
/// List order is draw order: later entries paint over earlier ones.
pub trait MapProvider {
    fn all_personnel(&self) -> ProviderResult<Vec<Personnel>>;

    fn personnel_by_designation(&self, designation: Designation) -> ProviderResult<Vec<Personnel>> {
        let mut all = self.all_personnel()?;
        all.retain(|p| p.designation == designation);
        Ok(all)
    }

    fn medical_personnel(&self) -> ProviderResult<Vec<Personnel>> {
        self.personnel_by_designation(Designation::Medical)
    }

    fn security_personnel(&self) -> ProviderResult<Vec<Personnel>> {
        self.personnel_by_designation(Designation::Security)
    }

    /// Incidents that have not been archived.
    fn all_current_incidents(&self) -> ProviderResult<Vec<Incident>>;

    fn incidents_by_type(&self, kind: Designation) -> ProviderResult<Vec<Incident>> {
        let mut all = self.all_current_incidents()?;
        all.retain(|i| i.kind == kind);
        Ok(all)
    }

    fn medical_incidents(&self) -> ProviderResult<Vec<Incident>> {
        self.incidents_by_type(Designation::Medical)
    }

    fn security_incidents(&self) -> ProviderResult<Vec<Incident>> {
        self.incidents_by_type(Designation::Security)
    }

    fn latitude_start(&self) -> ProviderResult<Decimal>;
    fn latitude_end(&self) -> ProviderResult<Decimal>;
    fn longitude_start(&self) -> ProviderResult<Decimal>;
    fn longitude_end(&self) -> ProviderResult<Decimal>;

    /// The four bounds as one box. Assumed stable for one render pass.
    fn bounds(&self) -> ProviderResult<GeoBox> {
        Ok(GeoBox::new(
            self.latitude_start()?,
            self.latitude_end()?,
            self.longitude_start()?,
            self.longitude_end()?,
        ))
    }
}

// Forward every accessor (overrides included) through smart pointers so a
// view can hold `&P`, `Box<dyn MapProvider>` or a shared `Arc<P>`.
macro_rules! forward_map_provider {
    ($($ptr:ty),+) => {$(
        impl<P: MapProvider + ?Sized> MapProvider for $ptr {
            fn all_personnel(&self) -> ProviderResult<Vec<Personnel>> {
                (**self).all_personnel()
            }
            fn personnel_by_designation(&self, d: Designation) -> ProviderResult<Vec<Personnel>> {
                (**self).personnel_by_designation(d)
            }
            fn medical_personnel(&self) -> ProviderResult<Vec<Personnel>> {
                (**self).medical_personnel()
            }
            fn security_personnel(&self) -> ProviderResult<Vec<Personnel>> {
                (**self).security_personnel()
            }
            fn all_current_incidents(&self) -> ProviderResult<Vec<Incident>> {
                (**self).all_current_incidents()
            }
            fn incidents_by_type(&self, kind: Designation) -> ProviderResult<Vec<Incident>> {
                (**self).incidents_by_type(kind)
            }
            fn medical_incidents(&self) -> ProviderResult<Vec<Incident>> {
                (**self).medical_incidents()
            }
            fn security_incidents(&self) -> ProviderResult<Vec<Incident>> {
                (**self).security_incidents()
            }
            fn latitude_start(&self) -> ProviderResult<Decimal> {
                (**self).latitude_start()
            }
            fn latitude_end(&self) -> ProviderResult<Decimal> {
                (**self).latitude_end()
            }
            fn longitude_start(&self) -> ProviderResult<Decimal> {
                (**self).longitude_start()
            }
            fn longitude_end(&self) -> ProviderResult<Decimal> {
                (**self).longitude_end()
            }
            fn bounds(&self) -> ProviderResult<GeoBox> {
                (**self).bounds()
            }
        }
    )+};
}

forward_map_provider!(&P, Box<P>, Arc<P>);
