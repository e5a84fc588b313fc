use serde::{Deserialize, Deserializer, Serialize};

/// Identifier as written in JSON: graphs exported from numeric data use plain integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
	Str(String),
	UInt(u64),
	Int(i64),
}

impl From<RawKey> for String {
	fn from(key: RawKey) -> Self {
		match key {
			RawKey::Str(s) => s,
			RawKey::UInt(n) => n.to_string(),
			RawKey::Int(n) => n.to_string(),
		}
	}
}

fn key_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	RawKey::deserialize(deserializer).map(String::from)
}

fn opt_key_string<'de, D: Deserializer<'de>>(
	deserializer: D,
) -> Result<Option<String>, D::Error> {
	Ok(Option::<RawKey>::deserialize(deserializer)?.map(String::from))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	#[serde(deserialize_with = "key_string")]
	pub id: String,
	#[serde(default)]
	pub label: Option<String>,
	#[serde(default)]
	pub color: Option<String>,
	#[serde(default)]
	pub group: Option<u32>,
}

/// A link between two nodes.
///
/// `source` and `target` hold node ids when string links are enabled, or
/// zero-based positions in the node list otherwise. JSON numbers are read as
/// their decimal string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
	#[serde(default, deserialize_with = "opt_key_string")]
	pub id: Option<String>,
	#[serde(deserialize_with = "key_string")]
	pub source: String,
	#[serde(deserialize_with = "key_string")]
	pub target: String,
	#[serde(default)]
	pub label: Option<String>,
}

impl GraphLink {
	/// Key used in the link selection map: the link id, or its position in the link list.
	pub fn key(&self, index: usize) -> String {
		self.id.clone().unwrap_or_else(|| index.to_string())
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn link_key_prefers_id() {
		let link = GraphLink {
			id: Some("ab".into()),
			source: "a".into(),
			target: "b".into(),
			label: None,
		};
		assert_eq!(link.key(7), "ab");
		assert_eq!(GraphLink { id: None, ..link }.key(7), "7");
	}

	#[test]
	fn node_optional_fields_can_be_omitted() {
		let node: GraphNode = serde_json::from_str(r#"{"id":"n1"}"#).unwrap();
		assert_eq!(node.id, "n1");
		assert!(node.label.is_none() && node.color.is_none() && node.group.is_none());
	}

	#[test]
	fn numeric_keys_become_decimal_strings() {
		let node: GraphNode = serde_json::from_str(r#"{"id":128}"#).unwrap();
		assert_eq!(node.id, "128");

		let link: GraphLink =
			serde_json::from_str(r#"{"id":-3,"source":0,"target":"b"}"#).unwrap();
		assert_eq!(link.id.as_deref(), Some("-3"));
		assert_eq!(link.source, "0");
		assert_eq!(link.target, "b");

		let link: GraphLink = serde_json::from_str(r#"{"id":null,"source":1,"target":2}"#).unwrap();
		assert!(link.id.is_none());

		assert!(serde_json::from_str::<GraphNode>(r#"{"id":true}"#).is_err());
	}
}
