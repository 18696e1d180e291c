//! The static page registry: one entry per state guide.
//!
//! Slugs double as output filename stems and relative link targets, so
//! they must stay unique, lowercase, and hyphen-separated;
//! `SiteConfig::validate` enforces this before a build runs.

/// One row of the page registry.
#[derive(Debug, Clone, Copy)]
pub struct PageEntry {
    /// URL- and filesystem-safe identifier; output stem and link target.
    pub slug: &'static str,
    /// Display name, shown in titles and cards.
    pub name: &'static str,
    /// Meta description, also the card blurb on the index page.
    pub description: &'static str,
    /// Explicit source filename; `None` derives one from the slug.
    pub source: Option<&'static str>,
}

impl PageEntry {
    /// Entry whose source filename follows the draft naming convention.
    pub const fn new(
        slug: &'static str,
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            slug,
            name,
            description,
            source: None,
        }
    }
}

/// All fifty state guides, in link order.
pub const STATE_PAGES: &[PageEntry] = &[
    PageEntry::new("alabama", "Alabama", "SOS nonprofit filings, ALDOR withholding, DOL UI for AL churches."),
    PageEntry::new("alaska", "Alaska", "CBPL biennial report, no state income tax, DOL UI for AK churches."),
    PageEntry::new("arizona", "Arizona", "ACC annual report, ADOR withholding, DES unemployment for AZ churches."),
    PageEntry::new("arkansas", "Arkansas", "SOS annual report, DFA withholding, DWS UI for AR churches."),
    PageEntry::new("california", "California", "State filings, EDD payroll, AB 506 volunteer screening for CA churches."),
    PageEntry::new("colorado", "Colorado", "SOS periodic report, DOR withholding, CDLE/FAMLI for CO churches."),
    PageEntry::new("connecticut", "Connecticut", "SOTS annual report, DCP charity registration, CT Paid Leave for CT churches."),
    PageEntry::new("delaware", "Delaware", "Division of Corporations annual report, DOR withholding for DE churches."),
    PageEntry::new("florida", "Florida", "Annual report deadline, reemployment tax for FL churches."),
    PageEntry::new("georgia", "Georgia", "Annual registration, DOL payroll, charities renewal for GA churches."),
    PageEntry::new("hawaii", "Hawaii", "DCCA annual report, TDI/PHCA obligations, DLIR UI for HI churches."),
    PageEntry::new("idaho", "Idaho", "SOS annual report, STC withholding, IDOL UI for ID churches."),
    PageEntry::new("illinois", "Illinois", "NFP annual report, DCFS Mandated Reporter training for IL churches."),
    PageEntry::new("indiana", "Indiana", "INBiz biennial report, DOR withholding, county income tax for IN churches."),
    PageEntry::new("iowa", "Iowa", "SOS biennial report, Iowa DOR withholding, IWD UI for IA churches."),
    PageEntry::new("kansas", "Kansas", "SOS annual report, KDOR withholding, DOL UI for KS churches."),
    PageEntry::new("kentucky", "Kentucky", "SOS annual report, DOR withholding, local occupational tax for KY churches."),
    PageEntry::new("louisiana", "Louisiana", "SOS annual report, LDR withholding, LWC UI for LA churches."),
    PageEntry::new("maine", "Maine", "SOS annual report, MRS withholding, DOL UI reimbursement for ME churches."),
    PageEntry::new("maryland", "Maryland", "SDAT annual report, Comptroller withholding, county payroll tax for MD churches."),
    PageEntry::new("massachusetts", "Massachusetts", "SOC/AG dual reporting, PFML obligations, DUA UI for MA churches."),
    PageEntry::new("michigan", "Michigan", "LARA annual report, UIA exemption election for MI churches."),
    PageEntry::new("minnesota", "Minnesota", "SOS annual renewal, MN Paid Leave (2026), DEED UI for MN churches."),
    PageEntry::new("mississippi", "Mississippi", "SOS annual report, MDOR withholding, MDES UI for MS churches."),
    PageEntry::new("missouri", "Missouri", "No standard annual report, registered agent maintenance for MO churches."),
    PageEntry::new("montana", "Montana", "SOS annual report (April 15), DOR withholding, DLI UI for MT churches."),
    PageEntry::new("nebraska", "Nebraska", "SOS biennial report, DOR withholding, DOL UI for NE churches."),
    PageEntry::new("nevada", "Nevada", "SilverFlume annual list, no income tax but MBT, DETR UI for NV churches."),
    PageEntry::new("new-hampshire", "New Hampshire", "SOS annual report, AG Charitable Trusts, no income tax for NH churches."),
    PageEntry::new("new-jersey", "New Jersey", "SOS annual report, four payroll obligations (withholding/UI/SDI/FLI) for NJ churches."),
    PageEntry::new("new-mexico", "New Mexico", "SOS biennial report, GRT nuance, DWS UI for NM churches."),
    PageEntry::new("new-york", "New York", "CHAR500, DOS financial disclosure, DOL unemployment for NY churches."),
    PageEntry::new("north-carolina", "North Carolina", "Charitable solicitation license, UI exemption for NC churches."),
    PageEntry::new("north-dakota", "North Dakota", "SOS annual report (Aug 1), Tax Commissioner withholding for ND churches."),
    PageEntry::new("ohio", "Ohio", "5-year SOS renewal, AG annual report, ODJFS quarterly for OH churches."),
    PageEntry::new("oklahoma", "Oklahoma", "SOS annual report (July 1), Tax Commission withholding for OK churches."),
    PageEntry::new("oregon", "Oregon", "SOS annual report, DOJ charity registration, OR Paid Leave for OR churches."),
    PageEntry::new("pennsylvania", "Pennsylvania", "Annual report, Act 153 three-clearance requirement for PA churches."),
    PageEntry::new("rhode-island", "Rhode Island", "SOS annual report, AG charity registration, TDI/TCI for RI churches."),
    PageEntry::new("south-carolina", "South Carolina", "SOS annual report, SCDOR withholding, DEW UI for SC churches."),
    PageEntry::new("south-dakota", "South Dakota", "SOS annual report, no state income tax, DLR UI for SD churches."),
    PageEntry::new("tennessee", "Tennessee", "SOS annual report, no income tax, DOL UI for TN churches."),
    PageEntry::new("texas", "Texas", "SOS entity maintenance, franchise tax, payroll for TX churches."),
    PageEntry::new("utah", "Utah", "DCED annual report, TAC withholding, DWS UI for UT churches."),
    PageEntry::new("vermont", "Vermont", "SOS annual report, DFR charity registration, DET UI for VT churches."),
    PageEntry::new("virginia", "Virginia", "SCC annual report, Tax Dept withholding, VEC UI for VA churches."),
    PageEntry::new("washington", "Washington", "SOS annual report, no income tax, L&I/ESD/PFML for WA churches."),
    PageEntry::new("west-virginia", "West Virginia", "SOS annual report, Tax Dept withholding, BRT UI for WV churches."),
    PageEntry::new("wisconsin", "Wisconsin", "DFI annual report, DOR withholding, AG charity registration for WI churches."),
    PageEntry::new("wyoming", "Wyoming", "SOS annual report, no state income tax, DWS UI for WY churches."),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_covers_fifty_states() {
        assert_eq!(STATE_PAGES.len(), 50);
    }

    #[test]
    fn test_registry_slugs_are_unique() {
        let slugs: HashSet<_> = STATE_PAGES.iter().map(|e| e.slug).collect();
        assert_eq!(slugs.len(), STATE_PAGES.len());
    }

    #[test]
    fn test_registry_slugs_are_url_safe() {
        for entry in STATE_PAGES {
            assert!(
                entry
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {:?}",
                entry.slug
            );
        }
    }

    #[test]
    fn test_registry_uses_conventional_sources() {
        assert!(STATE_PAGES.iter().all(|e| e.source.is_none()));
    }

    #[test]
    fn test_multi_word_states_are_hyphenated() {
        assert!(STATE_PAGES.iter().any(|e| e.slug == "new-hampshire"));
        assert!(STATE_PAGES.iter().any(|e| e.slug == "north-carolina"));
    }
}
