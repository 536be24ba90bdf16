use crate::core::ifs::linear_function::{LinearFunction, LinearFunctionError, Rounding};
use crate::core::ifs::system::IteratedFunctionSystem;
use crate::core::ifs::variation::Variation;
use serde::Deserialize;
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum FlameDocumentError {
    Document {
        source: serde_json::Error,
    },
    GroupNotFound {
        name: String,
    },
    CoefficientCount {
        group: String,
        index: usize,
        count: usize,
    },
    InvalidCoefficient {
        group: String,
        index: usize,
        value: String,
    },
    UnknownVariation {
        group: String,
        index: usize,
        name: String,
    },
    Function {
        group: String,
        index: usize,
        source: LinearFunctionError,
    },
}

impl fmt::Display for FlameDocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document { source } => {
                write!(f, "Flame document is not valid JSON: {}", source)
            }
            Self::GroupNotFound { name } => {
                write!(f, "Flame document has no transform group named '{}'", name)
            }
            Self::CoefficientCount { group, index, count } => {
                write!(
                    f,
                    "Transform {} of group '{}' carries {} coefficients instead of 6",
                    index, group, count
                )
            }
            Self::InvalidCoefficient { group, index, value } => {
                write!(
                    f,
                    "Transform {} of group '{}' has an unparseable coefficient '{}'",
                    index, group, value
                )
            }
            Self::UnknownVariation { group, index, name } => {
                write!(
                    f,
                    "Transform {} of group '{}' names an unknown variation '{}'",
                    index, group, name
                )
            }
            Self::Function { group, index, source } => {
                write!(f, "Transform {} of group '{}' is invalid: {}", index, group, source)
            }
        }
    }
}

impl Error for FlameDocumentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Document { source } => Some(source),
            Self::Function { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FlameDocument {
    groups: Vec<FlameGroup>,
}

#[derive(Debug, Deserialize)]
struct FlameGroup {
    name: String,
    transforms: Vec<FlameTransform>,
}

#[derive(Debug, Deserialize)]
struct FlameTransform {
    weight: f64,
    coefs: String,
    #[serde(default)]
    variations: Vec<String>,
}

impl IteratedFunctionSystem {
    /// Builds a system from one named group of a flame document.
    ///
    /// The document is a named collection of named transform groups; each
    /// transform record carries a float `weight` and a `coefs` attribute of
    /// six space-separated floats stored column-major as
    /// `(x1, x2, y1, y2, o1, o2)`. Positions 1, 2 and 5 of that stored
    /// 6-tuple are sign-flipped relative to the coefficients they encode; the
    /// flip is a compatibility rule of the format and is applied here
    /// unconditionally.
    pub fn from_flame_document(
        document: &str,
        group_name: &str,
        rounding: Rounding,
    ) -> Result<Self, FlameDocumentError> {
        let document: FlameDocument = serde_json::from_str(document)
            .map_err(|source| FlameDocumentError::Document { source })?;

        let group = document
            .groups
            .into_iter()
            .find(|group| group.name == group_name)
            .ok_or_else(|| FlameDocumentError::GroupNotFound {
                name: group_name.to_owned(),
            })?;

        let mut system = Self::new(&group.name);

        for (index, record) in group.transforms.iter().enumerate() {
            system.add_function(parse_transform(record, &group.name, index, rounding)?);
        }

        Ok(system)
    }
}

fn parse_transform(
    record: &FlameTransform,
    group: &str,
    index: usize,
    rounding: Rounding,
) -> Result<LinearFunction, FlameDocumentError> {
    let tokens: Vec<&str> = record.coefs.split_whitespace().collect();
    if tokens.len() != 6 {
        return Err(FlameDocumentError::CoefficientCount {
            group: group.to_owned(),
            index,
            count: tokens.len(),
        });
    }

    let mut stored = [0.0_f64; 6];
    for (slot, raw) in stored.iter_mut().zip(&tokens) {
        *slot = raw
            .parse()
            .map_err(|_| FlameDocumentError::InvalidCoefficient {
                group: group.to_owned(),
                index,
                value: (*raw).to_owned(),
            })?;
    }

    let [x1, x2, y1, y2, o1, o2] = stored;
    let coefficients = [[x1, -y1, o1], [-x2, y2, -o2]];

    let mut function = LinearFunction::new(
        &format!("{}[{}]", group, index),
        coefficients,
        record.weight,
        rounding,
    )
    .map_err(|source| FlameDocumentError::Function {
        group: group.to_owned(),
        index,
        source,
    })?;

    for name in &record.variations {
        let variation =
            Variation::from_name(name).ok_or_else(|| FlameDocumentError::UnknownVariation {
                group: group.to_owned(),
                index,
                name: name.clone(),
            })?;
        function.add_variation(variation);
    }

    Ok(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::affine_point::AffinePoint;

    const DOCUMENT: &str = r#"{
        "name": "library",
        "groups": [
            {
                "name": "half scale",
                "transforms": [
                    { "weight": 1.0, "coefs": "0.5 0 0 0.5 0 0" }
                ]
            },
            {
                "name": "ordered",
                "transforms": [
                    { "weight": 0.6, "coefs": "1 2 3 4 5 6" },
                    { "weight": 0.4, "coefs": "1 0 0 1 0 0", "variations": ["sinusoidal"] }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_loads_the_named_group() {
        let system =
            IteratedFunctionSystem::from_flame_document(DOCUMENT, "half scale", Rounding::default())
                .unwrap();

        assert_eq!(system.name(), "half scale");
        assert_eq!(system.len(), 1);
        assert_eq!(system.total_weight(), 1.0);

        let image = system.functions()[0].evaluate(AffinePoint::new(2.0, -4.0));
        assert_eq!(image, AffinePoint::new(1.0, -2.0));
    }

    #[test]
    fn test_column_major_read_with_sign_flips() {
        // Stored (x1, x2, y1, y2, o1, o2) = (1, 2, 3, 4, 5, 6) must land as
        // rows [[1, -3, 5], [-2, 4, -6]].
        let system =
            IteratedFunctionSystem::from_flame_document(DOCUMENT, "ordered", Rounding::default())
                .unwrap();

        let coefficients = system.functions()[0].coefficients();
        assert_eq!(coefficients, [[1.0, -3.0, 5.0], [-2.0, 4.0, -6.0]]);
    }

    #[test]
    fn test_transform_order_and_variations_are_preserved() {
        let system =
            IteratedFunctionSystem::from_flame_document(DOCUMENT, "ordered", Rounding::default())
                .unwrap();

        assert_eq!(system.len(), 2);
        assert_eq!(system.functions()[0].weight(), 0.6);
        assert_eq!(system.functions()[1].weight(), 0.4);
        assert_eq!(system.functions()[0].variations(), &[]);
        assert_eq!(system.functions()[1].variations(), &[Variation::Sinusoidal]);
    }

    #[test]
    fn test_missing_group_is_a_lookup_failure() {
        let result =
            IteratedFunctionSystem::from_flame_document(DOCUMENT, "nope", Rounding::default());

        assert!(matches!(
            result,
            Err(FlameDocumentError::GroupNotFound { name }) if name == "nope"
        ));
    }

    #[test]
    fn test_malformed_json_is_a_document_error() {
        let result =
            IteratedFunctionSystem::from_flame_document("{ not json", "x", Rounding::default());

        assert!(matches!(result, Err(FlameDocumentError::Document { .. })));
    }

    #[test]
    fn test_wrong_coefficient_count_is_rejected() {
        let document = r#"{
            "name": "library",
            "groups": [
                { "name": "short", "transforms": [ { "weight": 1.0, "coefs": "1 2 3 4 5" } ] }
            ]
        }"#;

        let result =
            IteratedFunctionSystem::from_flame_document(document, "short", Rounding::default());

        assert!(matches!(
            result,
            Err(FlameDocumentError::CoefficientCount { count: 5, .. })
        ));
    }

    #[test]
    fn test_unparseable_coefficient_is_rejected() {
        let document = r#"{
            "name": "library",
            "groups": [
                { "name": "bad", "transforms": [ { "weight": 1.0, "coefs": "1 2 x 4 5 6" } ] }
            ]
        }"#;

        let result =
            IteratedFunctionSystem::from_flame_document(document, "bad", Rounding::default());

        assert!(matches!(
            result,
            Err(FlameDocumentError::InvalidCoefficient { value, .. }) if value == "x"
        ));
    }

    #[test]
    fn test_unknown_variation_is_rejected() {
        let document = r#"{
            "name": "library",
            "groups": [
                {
                    "name": "bad",
                    "transforms": [
                        { "weight": 1.0, "coefs": "1 0 0 1 0 0", "variations": ["popcorn"] }
                    ]
                }
            ]
        }"#;

        let result =
            IteratedFunctionSystem::from_flame_document(document, "bad", Rounding::default());

        assert!(matches!(
            result,
            Err(FlameDocumentError::UnknownVariation { name, .. }) if name == "popcorn"
        ));
    }

    #[test]
    fn test_negative_weight_surfaces_the_function_error() {
        let document = r#"{
            "name": "library",
            "groups": [
                { "name": "bad", "transforms": [ { "weight": -1.0, "coefs": "1 0 0 1 0 0" } ] }
            ]
        }"#;

        let result =
            IteratedFunctionSystem::from_flame_document(document, "bad", Rounding::default());

        assert!(matches!(
            result,
            Err(FlameDocumentError::Function {
                source: LinearFunctionError::NegativeWeight { .. },
                ..
            })
        ));
    }
}
