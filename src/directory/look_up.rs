use crate::tools::normalize;
use dto::pharmacist::PharmacistRecord;
use dto::pharmacist_to_look_up::PharmacistToLookUp;

/// Keep the pharmacists matching every given criterion, in their original order.
///
/// The name criterion matches any part of the full name, regardless of case, accents and spacing.
/// The section criterion has to match the whole section, with the same leniency.
pub fn look_pharmacists_up<'a>(
    records: &'a [PharmacistRecord],
    pharmacist_to_look_up: &PharmacistToLookUp,
) -> Vec<&'a PharmacistRecord> {
    let name = pharmacist_to_look_up
        .name()
        .as_deref()
        .map(normalize)
        .filter(|name| !name.is_empty());
    let section = pharmacist_to_look_up.section().as_deref().map(normalize);

    records
        .iter()
        .filter(|record| {
            let pharmacist = record.pharmacist();

            if let Some(registration_number) = pharmacist_to_look_up.registration_number() {
                if registration_number != pharmacist.registration_number() {
                    return false;
                }
            }

            if let Some(nationality) = pharmacist_to_look_up.nationality() {
                if nationality != pharmacist.nationality() {
                    return false;
                }
            }

            if let Some(name) = &name {
                if !normalize(pharmacist.full_name()).contains(name.as_str()) {
                    return false;
                }
            }

            if let Some(section) = &section {
                if *section != normalize(pharmacist.section()) {
                    return false;
                }
            }

            true
        })
        .collect()
}
