use std::path::PathBuf;

use tempfile::TempDir;

use crate::catalog::{Catalog, parse_catalog};
use crate::core::{Liability, Localized, Record};
use crate::i18n::Lang;

/// French sample catalog: plain values, every optional field shape.
pub const SAMPLE_FR_JSON: &str = r#"[
  {
    "name": "Indemnité de licenciement",
    "keywords": ["rupture", "contrat", "fin de relation de travail"],
    "definition": "Versée au travailleur lors de la rupture de la relation de travail.",
    "reason": "Loi 90-11 Art. 73-4",
    "cotisable": "Non",
    "imposable": "Non",
    "exoneration_reason": "Indemnité à caractère de dommages et intérêts",
    "pdfPage": 27
  },
  {
    "name": "Prime de rendement",
    "abbreviations": ["PRI", "PRC"],
    "keywords": ["productivité", "performance"],
    "definition": "Prime liée au rendement individuel ou collectif du travailleur.",
    "reason": "Loi 90-11 Art. 81",
    "cotisable": "Oui",
    "imposable": "Oui",
    "pdfPage": 31
  },
  {
    "name": "Indemnité d'expérience professionnelle",
    "abbreviations": ["IEP"],
    "keywords": ["ancienneté", "expérience"],
    "definition": "Rémunère l'expérience acquise par le travailleur.",
    "reason": "Décret 07-304",
    "cotisable": "Oui",
    "imposable": "Oui",
    "pdfPage": 30
  },
  {
    "name": "Prime de panier",
    "abbreviations": null,
    "keywords": ["repas", "restauration"],
    "definition": "Compense les frais de repas du travailleur.",
    "reason": "Décret 96-208 Art. 2",
    "cotisable": "Non",
    "imposable": "Non",
    "exoneration_reason": "Frais de repas",
    "pdfPage": null
  },
  {
    "name": "Indemnité de zone",
    "keywords": null,
    "definition": "Versée aux travailleurs exerçant dans les wilayas du sud.",
    "reason": "Décret 95-300",
    "cotisable": "Oui",
    "imposable": "Oui"
  }
]"#;

/// English sample catalog: mixes per-language objects and plain values.
pub const SAMPLE_EN_JSON: &str = r#"[
  {
    "name": {"en": "Severance pay", "fr": "Indemnité de licenciement"},
    "keywords": {"en": ["dismissal", "termination"], "ar": null},
    "definition": {"en": "Paid to the worker when the employment relationship ends."},
    "reason": "Law 90-11 Art. 73-4",
    "cotisable": "No",
    "imposable": "No",
    "exoneration_reason": {"en": "Compensation for damages"},
    "pdfPage": 27
  },
  {
    "name": {"en": "Performance bonus"},
    "abbreviations": ["PRI", "PRC"],
    "keywords": {"en": ["productivity"]},
    "definition": "Bonus tied to individual or collective output.",
    "reason": "Law 90-11 Art. 81",
    "cotisable": "Yes",
    "imposable": "Yes",
    "pdfPage": 31
  },
  {
    "name": "Meal allowance",
    "definition": "Covers the worker's meal costs.",
    "reason": "Decree 96-208 Art. 2",
    "cotisable": "No",
    "imposable": "No"
  }
]"#;

/// Arabic sample catalog.
pub const SAMPLE_AR_JSON: &str = r#"[
  {
    "name": "تعويض التسريح",
    "keywords": ["فسخ", "عقد العمل"],
    "definition": "يُدفع للعامل عند إنهاء علاقة العمل.",
    "reason": "القانون 90-11 المادة 73-4",
    "cotisable": "لا",
    "imposable": "لا",
    "pdfPage": 27
  },
  {
    "name": "منحة المردودية",
    "abbreviations": ["PRI"],
    "definition": "منحة مرتبطة بالمردود الفردي أو الجماعي.",
    "reason": "القانون 90-11 المادة 81",
    "cotisable": "نعم",
    "imposable": "نعم",
    "pdfPage": 31
  }
]"#;

/// Sample catalog document for `lang`.
#[must_use]
pub const fn sample_json(lang: Lang) -> &'static str {
    match lang {
        Lang::Fr => SAMPLE_FR_JSON,
        Lang::Ar => SAMPLE_AR_JSON,
        Lang::En => SAMPLE_EN_JSON,
    }
}

/// Parsed sample catalog for `lang`, falling back to French.
pub fn sample_catalog(lang: Lang) -> Catalog {
    parse_catalog(lang, Lang::Fr, sample_json(lang).as_bytes(), false)
        .expect("sample catalog should parse")
}

/// Minimal record with a plain name and keywords; other text fields empty.
pub fn record(name: &str, keywords: &[&str]) -> Record {
    Record {
        name: Localized::from(name),
        abbreviations: Vec::new(),
        keywords: Localized::Plain(keywords.iter().map(|k| (*k).to_string()).collect()),
        definition: Localized::default(),
        reason: Localized::default(),
        cotisable: Liability::Yes,
        imposable: Liability::Yes,
        exoneration_reason: None,
        pdf_page: None,
    }
}

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl UnitTestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {:?}", data_path);

        Self { temp_dir, data_path }
    }

    /// Create a test file with content.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write the sample catalogs for every language under `data/`.
    pub fn with_sample_catalogs(self) -> Self {
        for lang in Lang::all() {
            self.create_file(&format!("data/{}.json", lang.code()), sample_json(*lang));
        }
        self
    }
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}
