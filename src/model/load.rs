use super::{AnalysisUnit, DeclId, DeclKind, MarkerInstance, Value};
use anyhow::Context;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Encoding of an analysis unit document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON; everything else is read as YAML
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
        {
            DocumentFormat::Json
        } else {
            DocumentFormat::Yaml
        }
    }
}

/// Load an analysis unit from a YAML or JSON document on disk
pub fn load_unit(path: &Path) -> anyhow::Result<AnalysisUnit> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read analysis unit {}", path.display()))?;
    parse_unit(&content, DocumentFormat::from_path(path))
        .with_context(|| format!("failed to parse analysis unit {}", path.display()))
}

/// Parse an analysis unit document
pub fn parse_unit(content: &str, format: DocumentFormat) -> anyhow::Result<AnalysisUnit> {
    let document: UnitDocument = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        DocumentFormat::Json => serde_json::from_str(content)?,
    };
    Ok(document.into_unit())
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UnitDocument {
    #[serde(default)]
    marker_types: BTreeMap<String, Vec<RawMarker>>,
    #[serde(default)]
    classes: Vec<RawClass>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawClassKind {
    #[default]
    Class,
    Interface,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClass {
    name: String,
    #[serde(default)]
    kind: RawClassKind,
    #[serde(default)]
    round: u32,
    #[serde(default)]
    markers: Vec<RawMarker>,
    #[serde(default)]
    methods: Vec<RawMethod>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMethod {
    name: String,
    #[serde(default)]
    markers: Vec<RawMarker>,
    #[serde(default)]
    parameters: Vec<RawParameter>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParameter {
    name: String,
    #[serde(default)]
    markers: Vec<RawMarker>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMarker {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    args: RawArguments,
}

/// Plain strings and sequences map directly; tokens and nested markers are tagged maps.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Str(String),
    List(Vec<RawValue>),
    Token { token: String },
    Marker { marker: RawMarker },
}

/// Argument map that keeps document order
#[derive(Debug, Default)]
struct RawArguments(Vec<(String, RawValue)>);

impl<'de> Deserialize<'de> for RawArguments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ArgumentsVisitor;

        impl<'de> Visitor<'de> for ArgumentsVisitor {
            type Value = RawArguments;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a map of marker argument names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut args = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, RawValue>()? {
                    args.push((name, value));
                }
                Ok(RawArguments(args))
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
                Ok(RawArguments::default())
            }
        }

        deserializer.deserialize_any(ArgumentsVisitor)
    }
}

impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Str(s) => Value::Str(s),
            RawValue::List(items) => Value::List(items.into_iter().map(Value::from).collect()),
            RawValue::Token { token } => Value::Token(token),
            RawValue::Marker { marker } => Value::Marker(marker.into()),
        }
    }
}

impl From<RawMarker> for MarkerInstance {
    fn from(raw: RawMarker) -> Self {
        MarkerInstance {
            qualified_name: raw.type_name,
            arguments: raw
                .args
                .0
                .into_iter()
                .map(|(name, value)| (name, value.into()))
                .collect(),
        }
    }
}

fn convert_markers(raw: Vec<RawMarker>) -> Vec<MarkerInstance> {
    raw.into_iter().map(MarkerInstance::from).collect()
}

impl UnitDocument {
    fn into_unit(self) -> AnalysisUnit {
        let mut unit = AnalysisUnit::new();
        for (name, meta) in self.marker_types {
            unit.add_marker_type(name, convert_markers(meta));
        }
        for class in self.classes {
            let kind = match class.kind {
                RawClassKind::Class => DeclKind::Class,
                RawClassKind::Interface => DeclKind::Interface,
            };
            let class_id: DeclId =
                unit.add_declaration(kind, class.name, None, convert_markers(class.markers));
            for method in class.methods {
                let method_id =
                    unit.add_method(class_id, method.name, convert_markers(method.markers));
                for parameter in method.parameters {
                    unit.add_parameter(
                        method_id,
                        parameter.name,
                        convert_markers(parameter.markers),
                    );
                }
            }
            unit.set_round(class_id, class.round);
        }
        debug!(declarations = unit.len(), "Loaded analysis unit");
        unit
    }
}
