//! PCBカタログモジュール
//!
//! 組み込みの6件、またはバージョン付きJSONファイルから読み込む。
//! 読み込み後は読み取り専用。

use crate::error::{Error, Result};
use crate::prompts::VALID_PRICE_TIERS;
use crate::types::PcbRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 対応しているカタログファイルのバージョン
pub const CATALOG_VERSION: u32 = 1;

/// カタログファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    version: u32,
    records: Vec<PcbRecord>,
}

/// 読み取り専用のPCBカタログ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<PcbRecord>,
}

impl Catalog {
    /// 組み込みカタログ
    pub fn builtin() -> Self {
        Self {
            records: builtin_records(),
        }
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(path = %path.display(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;

        if doc.version != CATALOG_VERSION {
            return Err(Error::Catalog(format!(
                "unsupported catalog version {} (expected {})",
                doc.version, CATALOG_VERSION
            )));
        }

        Self::from_records(doc.records)
    }

    /// レコード列から構築（検証付き）
    pub fn from_records(records: Vec<PcbRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::Catalog("catalog has no records".into()));
        }

        let mut seen = HashSet::new();
        let mut validated = Vec::with_capacity(records.len());

        for mut record in records {
            if record.name.trim().is_empty() {
                return Err(Error::Catalog("record with empty name".into()));
            }
            if !seen.insert(record.name.clone()) {
                return Err(Error::Catalog(format!("duplicate record name: {}", record.name)));
            }

            // 価格帯は Low/Moderate/High に正規化
            let tier = record.price_tier.trim().to_lowercase();
            if !VALID_PRICE_TIERS.contains(&tier.as_str()) {
                return Err(Error::Catalog(format!(
                    "invalid price tier '{}' for {}",
                    record.price_tier, record.name
                )));
            }
            record.price_tier = crate::dialogue::capitalize(&tier);

            validated.push(record);
        }

        Ok(Self { records: validated })
    }

    /// 全レコードを取得
    pub fn get_all(&self) -> &[PcbRecord] {
        &self.records
    }

    /// 名前で検索（完全一致）
    pub fn find(&self, name: &str) -> Option<&PcbRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// バージョン付きJSONとして書き出す
    pub fn to_json(&self) -> Result<String> {
        let doc = CatalogDocument {
            version: CATALOG_VERSION,
            records: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn record(
    name: &str,
    category: &str,
    applications: &[&str],
    price_tier: &str,
    description: &str,
    image_ref: &str,
) -> PcbRecord {
    PcbRecord {
        name: name.into(),
        category: category.into(),
        applications: applications.iter().map(|a| a.to_string()).collect(),
        price_tier: price_tier.into(),
        description: description.into(),
        image_ref: image_ref.into(),
    }
}

fn builtin_records() -> Vec<PcbRecord> {
    vec![
        record(
            "Single Sided PCBs",
            "Basic",
            &["Power sensors", "Relays", "Sensors", "Electronic toys"],
            "Low",
            "Single sided PCBs are the most basic type, featuring only one layer of substrate and a copper layer for conductivity. These PCBs are cost-effective and suitable for low-density designs.",
            "https://matchingelec.com/templates/yootheme/cache/d5/Single-Sided_PCB-d540cec0.jpeg",
        ),
        record(
            "Double Sided PCBs",
            "Advanced",
            &["Mobile phone systems", "Power monitoring", "Test equipment", "Amplifiers"],
            "Moderate",
            "Double sided PCBs feature conductive layers on both sides, allowing for increased circuit density and more complex designs. They use through-hole or surface mount technology.",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQlhOM5Jt2fft1pzNeVFnw5EhkZCSneZ2TPr39CvsQ-o6UbbdCzlzNQ3R2ffYVK8bD6yrY&usqp=CAU",
        ),
        record(
            "Multi-Layer PCBs",
            "Complex",
            &["Computers", "Medical equipment", "GPS trackers", "Mobile phones"],
            "High",
            "Multi-layer PCBs are designed with multiple layers of copper for high-speed circuits. They offer high design flexibility and are suitable for compact, high-performance applications.",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSCSa0LkIT0RpnopYDW7IwA_BA3ck9yKIluhw&s",
        ),
        record(
            "Rigid PCBs",
            "Rigid",
            &["GPS equipment", "X-ray systems", "Heart monitors", "Control tower instrumentation"],
            "Moderate",
            "Rigid PCBs are made from solid substrate material, making them strong and non-flexible. They are used in a wide range of applications where compactness and reliability are needed.",
            "pcb;s\\Rigid PCBs.jpg",
        ),
        record(
            "Flexible PCBs",
            "Flexible",
            &["OLED fabrication", "Automotive electronics", "Mobile phones", "Cameras"],
            "Moderate",
            "Flexible PCBs are built on flexible substrates, enabling them to be bent or folded. These are used in applications that require compactness and high flexibility, such as wearable electronics.",
            "https://cdn.prod.website-files.com/6038a4e3907dbd2e3e7b4046/6687ac9acf79da3be4a85475_pikaso_reimagine_A-closeup-view-of-a-flexible-LED-pcb.jpg",
        ),
        record(
            "Rigid-Flex PCBs",
            "Hybrid",
            &["Aerospace", "Medical devices", "Consumer electronics"],
            "High",
            "Rigid-Flex PCBs combine the properties of rigid and flexible circuit boards. They are lightweight and compact, making them ideal for high-performance, space-constrained applications.",
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQKzLCEluv3Xc1DtejwOQ4ej5L-zzkoPU78IA&s",
        ),
    ]
}
