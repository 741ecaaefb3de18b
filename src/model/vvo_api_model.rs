use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One stop as published in the VVO open data stop list.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct VvoStop {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub gid: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    /// City or locality the stop belongs to
    #[serde(default, deserialize_with = "string_or_empty")]
    pub place: String,
    /// Raw coordinate, may be empty or not a number at all
    #[serde(default, deserialize_with = "string_or_empty")]
    pub x: String,
    /// Raw coordinate, may be empty or not a number at all
    #[serde(default, deserialize_with = "string_or_empty")]
    pub y: String,
}

impl VvoStop {
    /// A stop is only dropped when both coordinates are empty.
    /// One empty coordinate still goes through the fallback conversion.
    pub fn has_coordinates(&self) -> bool {
        !self.x.is_empty() || !self.y.is_empty()
    }
}

// The feed isn't consistent about types. `null` becomes empty, numbers keep their JSON text.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Deserialize::deserialize(deserializer)?;

    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::VvoStop;

    #[test]
    fn test_missing_and_null_fields_become_empty() {
        let stops: Vec<VvoStop> = serde_json::from_str(
            r#"[{"gid":"7","name":"Postplatz","place":"Dresden","x":null,"extra":1}]"#,
        )
        .unwrap();

        assert_eq!(
            stops[0],
            VvoStop {
                gid: "7".to_string(),
                name: "Postplatz".to_string(),
                place: "Dresden".to_string(),
                x: String::new(),
                y: String::new(),
            }
        );
        assert!(!stops[0].has_coordinates());
    }

    #[test]
    fn test_one_coordinate_is_enough() {
        let stop = VvoStop {
            x: "13.7".to_string(),
            ..Default::default()
        };
        assert!(stop.has_coordinates());

        let stop = VvoStop {
            y: "51.0".to_string(),
            ..Default::default()
        };
        assert!(stop.has_coordinates());
    }

    #[test]
    fn test_numbers_are_kept_as_text() {
        let stops: Vec<VvoStop> = serde_json::from_str(
            r#"[{"gid":"1","name":"Hbf","place":"Dresden","x":"13.73","y":"51.04"},
                {"gid":33000007,"name":"Nossen","place":"Nossen","x":13.3,"y":51}]"#,
        )
        .unwrap();

        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].gid, "33000007");
        assert_eq!(stops[1].x, "13.3");
        assert_eq!(stops[1].y, "51");
    }
}
