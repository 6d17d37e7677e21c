use std::fmt;

/// Sentinel id of the free-text "Other" choice in selector lists.
pub const OTHER_ID: &str = "other";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
}

impl CatalogEntry {
    pub fn is_other(&self) -> bool {
        self.id == OTHER_ID
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label)
    }
}

const OTHER: CatalogEntry = CatalogEntry {
    id: OTHER_ID,
    label: "Other",
};

const NONE: CatalogEntry = CatalogEntry {
    id: "",
    label: "None",
};

pub const GENDERS: [CatalogEntry; 2] = [
    CatalogEntry {
        id: "male",
        label: "Male",
    },
    CatalogEntry {
        id: "female",
        label: "Female",
    },
];

pub const STATUSES: [CatalogEntry; 3] = [
    CatalogEntry {
        id: "student",
        label: "Student",
    },
    CatalogEntry {
        id: "alumni",
        label: "Alumni",
    },
    CatalogEntry {
        id: "public",
        label: "General public",
    },
];

// Domisili ids follow the BPS province codes the portal uses.
pub const REGIONS: [CatalogEntry; 8] = [
    CatalogEntry {
        id: "31",
        label: "DKI Jakarta",
    },
    CatalogEntry {
        id: "32",
        label: "Jawa Barat",
    },
    CatalogEntry {
        id: "33",
        label: "Jawa Tengah",
    },
    CatalogEntry {
        id: "34",
        label: "DI Yogyakarta",
    },
    CatalogEntry {
        id: "35",
        label: "Jawa Timur",
    },
    CatalogEntry {
        id: "12",
        label: "Sumatera Utara",
    },
    CatalogEntry {
        id: "73",
        label: "Sulawesi Selatan",
    },
    OTHER,
];

pub const CAMPUSES: [CatalogEntry; 6] = [
    CatalogEntry {
        id: "tel-u",
        label: "Telkom University",
    },
    CatalogEntry {
        id: "itb",
        label: "Institut Teknologi Bandung",
    },
    CatalogEntry {
        id: "ui",
        label: "Universitas Indonesia",
    },
    CatalogEntry {
        id: "ugm",
        label: "Universitas Gadjah Mada",
    },
    CatalogEntry {
        id: "its",
        label: "Institut Teknologi Sepuluh Nopember",
    },
    OTHER,
];

pub const MAJORS: [CatalogEntry; 7] = [
    CatalogEntry {
        id: "informatics",
        label: "Informatics",
    },
    CatalogEntry {
        id: "information-systems",
        label: "Information Systems",
    },
    CatalogEntry {
        id: "electrical-engineering",
        label: "Electrical Engineering",
    },
    CatalogEntry {
        id: "industrial-engineering",
        label: "Industrial Engineering",
    },
    CatalogEntry {
        id: "communication",
        label: "Communication Science",
    },
    CatalogEntry {
        id: "business-management",
        label: "Business Management",
    },
    OTHER,
];

// Membership in a chapter or an alumni program is optional, hence the
// leading empty entry.
pub const CHAPTERS: [CatalogEntry; 5] = [
    NONE,
    CatalogEntry {
        id: "jakarta",
        label: "Chapter Jakarta",
    },
    CatalogEntry {
        id: "bandung",
        label: "Chapter Bandung",
    },
    CatalogEntry {
        id: "yogyakarta",
        label: "Chapter Yogyakarta",
    },
    CatalogEntry {
        id: "surabaya",
        label: "Chapter Surabaya",
    },
];

pub const ALUMNI_PROGRAMS: [CatalogEntry; 4] = [
    NONE,
    CatalogEntry {
        id: "digistar-2022",
        label: "Digistar Class 2022",
    },
    CatalogEntry {
        id: "digistar-2023",
        label: "Digistar Class 2023",
    },
    CatalogEntry {
        id: "digistar-2024",
        label: "Digistar Class 2024",
    },
];

/// The entry of `entries` whose id matches the stored form value.
pub fn find(entries: &'static [CatalogEntry], id: &str) -> Option<CatalogEntry> {
    entries.iter().find(|entry| entry.id == id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_sentinel_closes_open_lists() {
        for list in [REGIONS.as_slice(), CAMPUSES.as_slice(), MAJORS.as_slice()] {
            assert_eq!(list.last().map(|e| e.id), Some(OTHER_ID));
        }
        assert!(!GENDERS.iter().any(|e| e.is_other()));
        assert!(!STATUSES.iter().any(|e| e.is_other()));
    }

    #[test]
    fn optional_lists_lead_with_an_empty_entry() {
        assert_eq!(CHAPTERS[0].id, "");
        assert_eq!(ALUMNI_PROGRAMS[0].id, "");
    }

    #[test]
    fn find_maps_stored_values_back_to_entries() {
        assert_eq!(find(&REGIONS, "31").map(|e| e.label), Some("DKI Jakarta"));
        assert_eq!(find(&CAMPUSES, OTHER_ID), Some(OTHER));
        assert_eq!(find(&MAJORS, "unknown"), None);
    }
}
