use std::collections::HashSet;

/// Marker silhouette for a service node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	Circle,
	Rectangle,
}

#[derive(Clone, Debug)]
pub struct Category {
	pub id: String,
	pub name: String,
	pub color: String,
}

/// One authored catalog row: a service belonging to a category.
#[derive(Clone, Debug)]
pub struct ServiceEntry {
	pub name: String,
	pub description: String,
	pub url: String,
	pub logo: String,
	pub shape: Shape,
}

/// The authored input: an ordered category list plus per-category ordered
/// service lists. Entry lists keyed by an unknown category id are dropped
/// at construction time, never at render time.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
	pub categories: Vec<Category>,
	services: Vec<(String, Vec<ServiceEntry>)>,
}

impl Catalog {
	pub fn new(categories: Vec<Category>, services: Vec<(String, Vec<ServiceEntry>)>) -> Self {
		let known: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
		if known.len() != categories.len() {
			log::warn!("catalog contains duplicate category ids");
		}
		let services = services
			.into_iter()
			.filter(|(category_id, entries)| {
				let ok = known.contains(category_id.as_str());
				if !ok {
					log::warn!(
						"dropping {} service entries for unknown category '{}'",
						entries.len(),
						category_id
					);
				}
				ok
			})
			.collect();
		Self { categories, services }
	}

	pub fn services_for(&self, category_id: &str) -> &[ServiceEntry] {
		self.services
			.iter()
			.find(|(id, _)| id == category_id)
			.map(|(_, entries)| entries.as_slice())
			.unwrap_or(&[])
	}

	pub fn total_service_count(&self) -> usize {
		self.services.iter().map(|(_, entries)| entries.len()).sum()
	}
}

/// A category's placed hub marker, in normalized coordinates.
#[derive(Clone, Debug)]
pub struct CategoryHub {
	pub category_id: String,
	pub x: f64,
	pub y: f64,
}

/// A placed service marker, in normalized coordinates.
#[derive(Clone, Debug)]
pub struct ServiceNode {
	pub id: String,
	pub name: String,
	pub description: String,
	pub url: String,
	pub logo: String,
	pub category_id: String,
	pub x: f64,
	pub y: f64,
	pub shape: Shape,
}

/// The immutable positioned dataset the viewport renders. Computed once at
/// startup and handed to the component by value.
#[derive(Clone, Debug, Default)]
pub struct EcosystemMap {
	pub categories: Vec<Category>,
	pub hubs: Vec<CategoryHub>,
	pub nodes: Vec<ServiceNode>,
}

impl EcosystemMap {
	pub fn category(&self, id: &str) -> Option<&Category> {
		self.categories.iter().find(|c| c.id == id)
	}

	pub fn hub(&self, category_id: &str) -> Option<&CategoryHub> {
		self.hubs.iter().find(|h| h.category_id == category_id)
	}

	pub fn nodes_of<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a ServiceNode> {
		self.nodes.iter().filter(move |n| n.category_id == category_id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn category(id: &str) -> Category {
		Category {
			id: id.into(),
			name: id.to_uppercase(),
			color: "#0079d6".into(),
		}
	}

	fn entry(name: &str) -> ServiceEntry {
		ServiceEntry {
			name: name.into(),
			description: String::new(),
			url: format!("https://example.com/{name}"),
			logo: format!("/logos/{name}.png"),
			shape: Shape::Circle,
		}
	}

	#[test]
	fn unknown_category_key_is_dropped() {
		let catalog = Catalog::new(
			vec![category("wallets")],
			vec![
				("wallets".into(), vec![entry("a"), entry("b")]),
				("ghost".into(), vec![entry("c")]),
			],
		);
		assert_eq!(catalog.total_service_count(), 2);
		assert!(catalog.services_for("ghost").is_empty());
	}

	#[test]
	fn services_for_unknown_id_is_empty_slice() {
		let catalog = Catalog::new(vec![category("wallets")], vec![]);
		assert!(catalog.services_for("wallets").is_empty());
		assert!(catalog.services_for("nope").is_empty());
	}

	#[test]
	fn map_lookups_skip_missing_references() {
		let map = EcosystemMap::default();
		assert!(map.category("x").is_none());
		assert!(map.hub("x").is_none());
		assert_eq!(map.nodes_of("x").count(), 0);
	}
}
