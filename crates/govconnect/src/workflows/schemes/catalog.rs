use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{EligibilityRule, Scheme, SchemeId};

/// The seed catalog shipped with the crate: six national welfare schemes.
/// Backs the demo and any deployment that has no catalog export yet.
pub fn seed_catalog() -> Vec<Scheme> {
    vec![
        Scheme {
            id: SchemeId("pm-kisan".to_string()),
            title: "Pradhan Mantri Kisan Samman Nidhi (PM-KISAN)".to_string(),
            description: "PM-KISAN provides income support to landholding farmers' families \
                          across the country to supplement their financial needs for procuring \
                          various inputs related to agriculture and allied activities as well \
                          as domestic needs."
                .to_string(),
            benefits: "Financial assistance of \u{20b9}6,000 per year to eligible farmer families"
                .to_string(),
            department: "Ministry of Agriculture & Farmers Welfare".to_string(),
            application_process: "Apply online through PM-KISAN portal or visit nearest Common \
                                  Service Centre (CSC)"
                .to_string(),
            required_documents: documents(&["Aadhaar Card", "Bank Account Details", "Land Records"]),
            eligibility: EligibilityRule {
                occupation: Some(vec!["farmer".to_string(), "agriculture".to_string()]),
                income_limit: Some(200_000.0),
                ..EligibilityRule::default()
            },
            is_active: true,
        },
        Scheme {
            id: SchemeId("pmjay".to_string()),
            title: "Ayushman Bharat Pradhan Mantri Jan Arogya Yojana (AB PM-JAY)".to_string(),
            description: "World's largest health insurance scheme providing cashless treatment \
                          at empaneled hospitals for secondary and tertiary care hospitalization."
                .to_string(),
            benefits: "Health insurance coverage of \u{20b9}5 lakh per family per year".to_string(),
            department: "Ministry of Health and Family Welfare".to_string(),
            application_process: "Visit nearest empaneled hospital or Common Service Centre with \
                                  required documents"
                .to_string(),
            required_documents: documents(&["Aadhaar Card", "Ration Card", "Income Certificate"]),
            eligibility: EligibilityRule {
                income_limit: Some(180_000.0),
                ..EligibilityRule::default()
            },
            is_active: true,
        },
        Scheme {
            id: SchemeId("pmay".to_string()),
            title: "Pradhan Mantri Awas Yojana (PMAY)".to_string(),
            description: "Housing for All mission aims to provide pucca houses with water \
                          connection, toilet, electricity and LPG connection to all eligible \
                          families."
                .to_string(),
            benefits: "Financial assistance for construction/purchase of houses".to_string(),
            department: "Ministry of Housing and Urban Affairs".to_string(),
            application_process: "Apply online through PMAY portal or visit nearest Urban Local \
                                  Body office"
                .to_string(),
            required_documents: documents(&[
                "Aadhaar Card",
                "Income Certificate",
                "Property Documents",
            ]),
            eligibility: EligibilityRule {
                income_limit: Some(300_000.0),
                ..EligibilityRule::default()
            },
            is_active: true,
        },
        Scheme {
            id: SchemeId("nsap".to_string()),
            title: "National Social Assistance Programme (NSAP)".to_string(),
            description: "NSAP represents a significant step towards the fulfillment of the \
                          Directive Principles in Article 41 of the Constitution."
                .to_string(),
            benefits: "Monthly pension for elderly, widows, and disabled persons".to_string(),
            department: "Ministry of Rural Development".to_string(),
            application_process: "Apply through respective State Government offices or online \
                                  portals"
                .to_string(),
            required_documents: documents(&[
                "Aadhaar Card",
                "Age Proof",
                "Income Certificate",
                "Bank Account Details",
            ]),
            eligibility: EligibilityRule {
                min_age: Some(60),
                income_limit: Some(120_000.0),
                ..EligibilityRule::default()
            },
            is_active: true,
        },
        Scheme {
            id: SchemeId("pmmy".to_string()),
            title: "Pradhan Mantri Mudra Yojana (PMMY)".to_string(),
            description: "MUDRA provides loans to micro/small business enterprises and to \
                          individuals who wish to start a business."
                .to_string(),
            benefits: "Collateral-free loans up to \u{20b9}10 lakh for micro enterprises"
                .to_string(),
            department: "Ministry of Finance".to_string(),
            application_process: "Apply through participating banks, NBFCs, or MFIs".to_string(),
            required_documents: documents(&[
                "Aadhaar Card",
                "PAN Card",
                "Business Plan",
                "Bank Statements",
            ]),
            eligibility: EligibilityRule {
                occupation: Some(vec![
                    "self-employed".to_string(),
                    "entrepreneur".to_string(),
                    "small business".to_string(),
                ]),
                ..EligibilityRule::default()
            },
            is_active: true,
        },
        Scheme {
            id: SchemeId("bbbp".to_string()),
            title: "Beti Bachao Beti Padhao".to_string(),
            description: "Initiative to generate awareness and improve the efficiency of welfare \
                          services for girls."
                .to_string(),
            benefits: "Financial incentives and educational support for girl children".to_string(),
            department: "Ministry of Women and Child Development".to_string(),
            application_process: "Apply through schools, Anganwadi centers, or district offices"
                .to_string(),
            required_documents: documents(&[
                "Birth Certificate",
                "Aadhaar Card",
                "School Enrollment Certificate",
            ]),
            eligibility: EligibilityRule {
                gender: Some(vec!["female".to_string()]),
                max_age: Some(18),
                ..EligibilityRule::default()
            },
            is_active: true,
        },
    ]
}

fn documents(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Persisted scheme row the way catalog stores keep it: list-valued
/// eligibility columns are JSON-encoded strings inside scalar fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredScheme {
    pub id: String,
    pub title: String,
    pub description: String,
    pub benefits: String,
    pub department: String,
    pub application_process: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub required_documents: Option<String>,
    pub min_age: Option<i64>,
    pub max_age: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub occupation: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub caste: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub state: Option<String>,
    pub income_limit: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl StoredScheme {
    /// Decodes into the domain scheme. Malformed or empty encoded lists
    /// leave the axis unrestricted so catalog corruption never fails a
    /// matching request.
    pub fn decode(&self) -> Scheme {
        Scheme {
            id: SchemeId(self.id.clone()),
            title: self.title.clone(),
            description: self.description.clone(),
            benefits: self.benefits.clone(),
            department: self.department.clone(),
            application_process: self.application_process.clone(),
            required_documents: decode_string_list(self.required_documents.as_deref())
                .unwrap_or_default(),
            eligibility: EligibilityRule {
                min_age: self.min_age,
                max_age: self.max_age,
                gender: decode_string_list(self.gender.as_deref()),
                occupation: decode_string_list(self.occupation.as_deref()),
                caste: decode_string_list(self.caste.as_deref()),
                state: decode_string_list(self.state.as_deref()),
                income_limit: self.income_limit,
            },
            is_active: self.is_active,
        }
    }

    /// Encodes a domain scheme back into the stored representation.
    pub fn from_scheme(scheme: &Scheme) -> Self {
        Self {
            id: scheme.id.0.clone(),
            title: scheme.title.clone(),
            description: scheme.description.clone(),
            benefits: scheme.benefits.clone(),
            department: scheme.department.clone(),
            application_process: scheme.application_process.clone(),
            required_documents: encode_string_list(Some(&scheme.required_documents)),
            min_age: scheme.eligibility.min_age,
            max_age: scheme.eligibility.max_age,
            gender: encode_string_list(scheme.eligibility.gender.as_deref()),
            occupation: encode_string_list(scheme.eligibility.occupation.as_deref()),
            caste: encode_string_list(scheme.eligibility.caste.as_deref()),
            state: encode_string_list(scheme.eligibility.state.as_deref()),
            income_limit: scheme.eligibility.income_limit,
            is_active: scheme.is_active,
        }
    }
}

fn default_active() -> bool {
    true
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn decode_string_list(encoded: Option<&str>) -> Option<Vec<String>> {
    let trimmed = encoded?.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Vec<String>>(trimmed) {
        Ok(values) if values.is_empty() => None,
        Ok(values) => Some(values),
        Err(_) => None,
    }
}

fn encode_string_list(values: Option<&[String]>) -> Option<String> {
    let values = values?;
    if values.is_empty() {
        return None;
    }
    serde_json::to_string(values).ok()
}

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog export: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a scheme catalog from a CSV export of stored records. Inactive rows
/// are kept; the repository filters them at query time.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Scheme>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Scheme>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut schemes = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for record in csv_reader.deserialize::<StoredScheme>() {
            let row = record?;
            if !seen.insert(row.id.clone()) {
                continue;
            }
            schemes.push(row.decode());
        }

        Ok(schemes)
    }
}
