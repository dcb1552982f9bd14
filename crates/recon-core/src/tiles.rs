//! Dashboard tiles and their display metadata.
//!
//! A [`Tile`] is either a record bucket from the [`MetricsReport`] or a value
//! derived from it at display time (total parcels, unit volumes).  Labels,
//! values and the critical highlight live here so the metrics engine stays
//! free of presentation concerns.

use serde::{Deserialize, Serialize};

use crate::formatting::{format_count, format_units};
use crate::models::{MetricBucket, MetricsReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tile {
    DropPallets,
    DropFloor,
    ParcelsDock,
    ParcelsYard,
    TotalParcels,
    TransshipYard,
    AzngOver72,
    LivesHanded,
    VolumeDoors,
    VolumeYard,
    Excluded,
}

impl Tile {
    /// Every tile, in dashboard order.
    pub const ALL: [Tile; 11] = [
        Tile::DropPallets,
        Tile::DropFloor,
        Tile::ParcelsDock,
        Tile::ParcelsYard,
        Tile::TotalParcels,
        Tile::TransshipYard,
        Tile::AzngOver72,
        Tile::LivesHanded,
        Tile::VolumeDoors,
        Tile::VolumeYard,
        Tile::Excluded,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tile::DropPallets => "Drop Pallets",
            Tile::DropFloor => "Drop Floor",
            Tile::ParcelsDock => "Parcels Dock",
            Tile::ParcelsYard => "Parcels Yard",
            Tile::TotalParcels => "Total Parcels",
            Tile::TransshipYard => "Transship Yard",
            Tile::AzngOver72 => "AZNG > 72h",
            Tile::LivesHanded => "Lives Handed",
            Tile::VolumeDoors => "Volume Doors",
            Tile::VolumeYard => "Volume Yard",
            Tile::Excluded => "Excluded",
        }
    }

    /// The record bucket behind this tile, `None` for derived values.
    pub fn bucket(self) -> Option<MetricBucket> {
        match self {
            Tile::DropPallets => Some(MetricBucket::DropPallets),
            Tile::DropFloor => Some(MetricBucket::DropFloor),
            Tile::ParcelsDock => Some(MetricBucket::ParcelsDock),
            Tile::ParcelsYard => Some(MetricBucket::ParcelsYard),
            Tile::TransshipYard => Some(MetricBucket::TransshipYard),
            Tile::AzngOver72 => Some(MetricBucket::AzngOver72),
            Tile::LivesHanded => Some(MetricBucket::LivesHanded),
            Tile::Excluded => Some(MetricBucket::Excluded),
            Tile::TotalParcels | Tile::VolumeDoors | Tile::VolumeYard => None,
        }
    }

    /// Text shown as the tile's headline value.
    pub fn value_text(self, report: &MetricsReport) -> String {
        match self {
            Tile::TotalParcels => format_count(report.total_parcels()),
            Tile::VolumeDoors => format_units(report.volume_doors),
            Tile::VolumeYard => format_units(report.volume_yard),
            other => match other.bucket() {
                Some(bucket) => format_count(report.count(bucket)),
                None => String::from("0"),
            },
        }
    }

    /// Whether the tile should be highlighted as needing attention.
    ///
    /// Any trailer over the dwell threshold is critical.  A non-zero dock
    /// parcel count is flagged too; the reason is undocumented upstream.
    pub fn is_critical(self, report: &MetricsReport) -> bool {
        match self {
            Tile::AzngOver72 => !report.azng_over_72.is_empty(),
            Tile::ParcelsDock => !report.parcels_dock.is_empty(),
            _ => false,
        }
    }

    /// Title of the detail table for this tile.
    pub fn detail_title(self, records: usize) -> String {
        format!(
            "{} DETAILS ({} Trailers)",
            self.label().to_uppercase(),
            format_count(records)
        )
    }

    pub fn next(self) -> Tile {
        let idx = self.index();
        Tile::ALL[(idx + 1) % Tile::ALL.len()]
    }

    pub fn previous(self) -> Tile {
        let idx = self.index();
        Tile::ALL[(idx + Tile::ALL.len() - 1) % Tile::ALL.len()]
    }

    /// Position of this tile in [`Tile::ALL`].
    pub fn index(self) -> usize {
        Tile::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordRef;

    fn refs(n: usize) -> Vec<RecordRef> {
        (0..n)
            .map(|i| RecordRef::new(format!("isa{i}"), format!("v{i}")))
            .collect()
    }

    #[test]
    fn test_every_bucket_has_a_tile() {
        for bucket in MetricBucket::ALL {
            assert!(
                Tile::ALL.iter().any(|t| t.bucket() == Some(bucket)),
                "bucket {} has no tile",
                bucket.key()
            );
        }
    }

    #[test]
    fn test_value_text_counts_and_volumes() {
        let report = MetricsReport {
            parcels_dock: refs(2),
            parcels_yard: refs(3),
            volume_doors: 12_500,
            volume_yard: 40,
            ..Default::default()
        };
        assert_eq!(Tile::ParcelsDock.value_text(&report), "2");
        assert_eq!(Tile::TotalParcels.value_text(&report), "5");
        assert_eq!(Tile::VolumeDoors.value_text(&report), "12,500");
        assert_eq!(Tile::VolumeYard.value_text(&report), "40");
        assert_eq!(Tile::Excluded.value_text(&report), "0");
    }

    #[test]
    fn test_critical_flags() {
        let clear = MetricsReport::default();
        assert!(Tile::ALL.iter().all(|t| !t.is_critical(&clear)));

        let report = MetricsReport {
            azng_over_72: refs(1),
            parcels_dock: refs(1),
            drop_floor: refs(4),
            ..Default::default()
        };
        assert!(Tile::AzngOver72.is_critical(&report));
        assert!(Tile::ParcelsDock.is_critical(&report));
        assert!(!Tile::DropFloor.is_critical(&report));
    }

    #[test]
    fn test_detail_title() {
        assert_eq!(
            Tile::DropPallets.detail_title(3),
            "DROP PALLETS DETAILS (3 Trailers)"
        );
    }

    #[test]
    fn test_next_previous_wrap() {
        assert_eq!(Tile::Excluded.next(), Tile::DropPallets);
        assert_eq!(Tile::DropPallets.previous(), Tile::Excluded);
        assert_eq!(Tile::DropFloor.next().previous(), Tile::DropFloor);
    }
}
