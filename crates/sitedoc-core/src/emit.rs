use sitedoc_index::{SearchIndex, TreeNode};

use crate::error::Result;

/// Render the navigation tree as a `.js` source assigning a global variable.
///
/// The page shell loads this file before the navigation panel script runs, so
/// the tree must be a plain script, not a module.
pub fn tree_source(tree: &[TreeNode], variable: &str, pretty: bool) -> Result<String> {
	let json = to_json(tree, pretty)?;
	Ok(format!("var {variable} = {json};\n"))
}

/// Render the search index as an ES module.
///
/// The default export is the flat record array — the wire contract of the
/// search UI. The positional term list rides alongside as a named export.
pub fn search_index_source(index: &SearchIndex, pretty: bool) -> Result<String> {
	let records = to_json(&index.records, pretty)?;
	let terms = to_json(&index.terms, pretty)?;
	Ok(format!(
		"const records = {records};\n\nexport const terms = {terms};\n\nexport default records;\n"
	))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
	let json = if pretty {
		serde_json::to_string_pretty(value)?
	} else {
		serde_json::to_string(value)?
	};
	Ok(json)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use sitedoc_index::{SearchIndex, SearchRecord, TreeNode};

	use super::{search_index_source, tree_source};

	#[test]
	fn tree_source_assigns_the_global_variable() {
		let tree = vec![TreeNode::entry("A", "classes/A.html", "", Vec::new())];
		let source = tree_source(&tree, "navigationTree", false).unwrap();
		assert_eq!(
			source,
			"var navigationTree = [[\"A\",\"classes/A.html\",\"\",[]]];\n"
		);
	}

	#[test]
	fn empty_tree_is_an_empty_array_not_null() {
		let source = tree_source(&[], "navigationTree", false).unwrap();
		assert_eq!(source, "var navigationTree = [];\n");
	}

	#[test]
	fn search_index_default_exports_the_records() {
		let mut index = SearchIndex::default();
		index.records.push(SearchRecord::Class {
			full_name: "A".to_string(),
			path: "classes/A.html".to_string(),
		});
		index.terms.push("a".to_string());

		let source = search_index_source(&index, false).unwrap();
		assert_eq!(
			source,
			concat!(
				"const records = [{\"type\":\"class\",\"fullName\":\"A\",\"path\":\"classes/A.html\"}];\n\n",
				"export const terms = [\"a\"];\n\n",
				"export default records;\n"
			)
		);
	}
}
