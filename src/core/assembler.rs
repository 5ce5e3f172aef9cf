use crate::core::normalizer::{dimensions_in_cm, normalize_trader_type, weight_in_kg};
use crate::domain::model::{Incoterm, Package, Party, ShipmentOrder};
use crate::domain::payload::{
    Account, ContactInformation, PackageDimensions, PackagePayload, PartyDetails, PostalAddress,
    RegistrationNumber,
};

pub const SHIPPER_ACCOUNT_TYPE: &str = "shipper";
pub const DUTIES_TAXES_ACCOUNT_TYPE: &str = "duties-taxes";

/// 帳號順序固定：shipper 在前，DDP 時 duties-taxes 在索引 1
pub fn assemble_accounts(
    incoterm: Incoterm,
    shipper_account_override: Option<&str>,
    default_account_number: &str,
    duties_account_number: Option<&str>,
) -> Vec<Account> {
    let shipper_number = shipper_account_override
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(default_account_number)
        .to_string();

    let mut accounts = vec![Account {
        number: shipper_number.clone(),
        type_code: SHIPPER_ACCOUNT_TYPE.to_string(),
    }];

    if incoterm == Incoterm::Ddp {
        accounts.push(Account {
            number: duties_account_number
                .map(str::to_string)
                .unwrap_or(shipper_number),
            type_code: DUTIES_TAXES_ACCOUNT_TYPE.to_string(),
        });
    }

    accounts
}

/// Explicit VAT and EORI numbers come first. The generic tax id only
/// fills the VAT slot when no VAT number was given.
pub fn registration_numbers(party: &Party) -> Vec<RegistrationNumber> {
    let issuer = party.country_code.clone().unwrap_or_default();

    let vat = party.vat_number.as_ref().or(party.tax_id.as_ref());
    let candidates = [("VAT", vat), ("EOR", party.eori_number.as_ref())];

    // 同一號碼可同時是 VAT 與 EORI（例如愛爾蘭），兩筆都要送
    candidates
        .into_iter()
        .filter_map(|(type_code, number)| {
            number.map(|number| RegistrationNumber {
                type_code: type_code.to_string(),
                number: number.clone(),
                issuer_country_code: issuer.clone(),
            })
        })
        .collect()
}

pub fn assemble_party(party: &Party) -> PartyDetails {
    let mut lines = party.street_lines.iter().cloned();
    let contact_name = party.contact_person.clone().unwrap_or_default();

    PartyDetails {
        postal_address: PostalAddress {
            postal_code: party.postal_code.clone(),
            city_name: party.city.clone().unwrap_or_default(),
            country_code: party.country_code.clone().unwrap_or_default(),
            address_line1: lines.next().unwrap_or_default(),
            address_line2: lines.next(),
            address_line3: lines.next(),
        },
        contact_information: ContactInformation {
            // 私人收件人沒有公司名稱時，以聯絡人姓名代替
            company_name: party.company_name.clone().unwrap_or_else(|| contact_name.clone()),
            full_name: contact_name,
            phone: party.phone.clone().unwrap_or_default(),
            email: party.email.clone(),
        },
        type_code: normalize_trader_type(party.trader_type.as_deref())
            .as_str()
            .to_string(),
        registration_numbers: registration_numbers(party),
    }
}

pub fn assemble_content_description(order: &ShipmentOrder) -> String {
    let base = order
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            order
                .items
                .iter()
                .map(|item| item.description.trim())
                .filter(|d| !d.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
        });

    match order.pallet_count {
        Some(count) => format!("{} - Pallets: {}", base, count),
        None => base,
    }
}

/// Builds one physical piece. Takes no dangerous-goods input.
pub fn build_package(package: &Package, package_marks: Option<&str>) -> PackagePayload {
    let description = match (package.description.as_deref(), package_marks) {
        (Some(description), Some(marks)) => Some(format!("{} - {}", description, marks)),
        (None, Some(marks)) => Some(marks.to_string()),
        (description, None) => description.map(str::to_string),
    };
    let (length, width, height) = dimensions_in_cm(&package.dimensions);

    PackagePayload {
        description,
        weight: weight_in_kg(&package.weight),
        dimensions: PackageDimensions {
            length,
            width,
            height,
        },
    }
}
