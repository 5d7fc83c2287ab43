use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::geo::{GeoBox, Position};
use crate::model::{Designation, Icon, Incident, Personnel};

use super::{MapProvider, ProviderResult};

/// A [`MapProvider`] over owned vectors.
///
/// Suitable for scenario files, demos and tests. Insertion order is preserved
/// and is the order markers are drawn in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryProvider {
    pub bounds: GeoBox,
    #[serde(default)]
    pub personnel: Vec<Personnel>,
    #[serde(default)]
    pub incidents: Vec<Incident>,
}

impl InMemoryProvider {
    pub fn new(bounds: GeoBox) -> Self {
        Self { bounds, personnel: Vec::new(), incidents: Vec::new() }
    }

    pub fn with_personnel(mut self, person: Personnel) -> Self {
        self.personnel.push(person);
        self
    }

    /// Shorthand for [`with_personnel`](Self::with_personnel) with a fresh record.
    pub fn with_person(
        self,
        id: impl Into<String>,
        designation: Designation,
        position: Position,
        icon: Icon,
    ) -> Self {
        self.with_personnel(Personnel::new(id, designation, position, icon))
    }

    pub fn with_incident(mut self, incident: Incident) -> Self {
        self.incidents.push(incident);
        self
    }
}

impl MapProvider for InMemoryProvider {
    fn all_personnel(&self) -> ProviderResult<Vec<Personnel>> {
        Ok(self.personnel.clone())
    }

    fn all_current_incidents(&self) -> ProviderResult<Vec<Incident>> {
        Ok(self.incidents.iter().filter(|i| !i.archived).cloned().collect())
    }

    fn latitude_start(&self) -> ProviderResult<Decimal> {
        Ok(self.bounds.latitude_start)
    }

    fn latitude_end(&self) -> ProviderResult<Decimal> {
        Ok(self.bounds.latitude_end)
    }

    fn longitude_start(&self) -> ProviderResult<Decimal> {
        Ok(self.bounds.longitude_start)
    }

    fn longitude_end(&self) -> ProviderResult<Decimal> {
        Ok(self.bounds.longitude_end)
    }

    fn bounds(&self) -> ProviderResult<GeoBox> {
        Ok(self.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    fn at(lat: i64, lon: i64) -> Position {
        Position::new(d(lat), d(lon))
    }

    fn provider() -> InMemoryProvider {
        let cross = Icon::new("cross", 16, 16);
        let shield = Icon::new("shield", 16, 16);
        InMemoryProvider::new(GeoBox::new(d(0), d(10), d(0), d(10)))
            .with_person("M1", Designation::Medical, at(1, 1), cross.clone())
            .with_person("S1", Designation::Security, at(2, 2), shield.clone())
            .with_person("M2", Designation::Medical, at(3, 3), cross)
            .with_person("T1", Designation::Technical, at(4, 4), shield)
            .with_incident(Incident::new(1, Designation::Medical, at(5, 5)))
            .with_incident(Incident::new(2, Designation::Security, at(6, 6)).archived())
            .with_incident(Incident::new(3, Designation::Security, at(7, 7)))
    }

    fn ids(list: &[Personnel]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    // ── personnel ─────────────────────────────────────────────────────────

    #[test]
    fn all_personnel_keeps_insertion_order() {
        assert_eq!(ids(&provider().all_personnel().unwrap()), ["M1", "S1", "M2", "T1"]);
    }

    #[test]
    fn designation_filters_preserve_order() {
        let p = provider();
        assert_eq!(ids(&p.medical_personnel().unwrap()), ["M1", "M2"]);
        assert_eq!(ids(&p.security_personnel().unwrap()), ["S1"]);
        assert_eq!(ids(&p.personnel_by_designation(Designation::Technical).unwrap()), ["T1"]);
    }

    // ── incidents ─────────────────────────────────────────────────────────

    #[test]
    fn archived_incidents_are_not_current() {
        let current: Vec<u32> =
            provider().all_current_incidents().unwrap().iter().map(|i| i.id).collect();
        assert_eq!(current, [1, 3]);
    }

    #[test]
    fn incidents_filter_by_type() {
        let p = provider();
        assert_eq!(p.medical_incidents().unwrap().len(), 1);
        assert_eq!(p.security_incidents().unwrap()[0].id, 3);
        assert!(p.incidents_by_type(Designation::Technical).unwrap().is_empty());
    }

    // ── bounds & forwarding ───────────────────────────────────────────────

    #[test]
    fn bounds_match_individual_accessors() {
        let p = provider();
        let b = p.bounds().unwrap();
        assert_eq!(b.latitude_start, p.latitude_start().unwrap());
        assert_eq!(b.longitude_end, p.longitude_end().unwrap());
    }

    #[test]
    fn boxed_and_shared_providers_forward() {
        let boxed: Box<dyn MapProvider> = Box::new(provider());
        assert_eq!(boxed.medical_personnel().unwrap().len(), 2);

        let shared = Arc::new(provider());
        assert_eq!(shared.bounds().unwrap(), provider().bounds);
    }
}
