use std::f64::consts::PI;

use rand::Rng;

use super::types::{Catalog, CategoryHub, EcosystemMap, ServiceNode};

/// Tunables for the radial placement. Distances are in normalized map
/// units, where the central hub sits at (0.5, 0.5).
#[derive(Clone, Debug)]
pub struct LayoutParams {
	/// Hub ring radius before growth for catalog size.
	pub base_ring_radius: f64,
	/// Ring growth per service in the whole catalog.
	pub ring_growth: f64,
	/// Distance of the innermost leaf band from its hub.
	pub base_node_radius: f64,
	/// Uniform jitter amplitude applied per axis to each leaf.
	pub jitter: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			base_ring_radius: 0.8,
			ring_growth: 0.02,
			base_node_radius: 0.35,
			jitter: 0.01,
		}
	}
}

/// Leaves are grouped into outward-stepping bands of this many.
const BAND_SIZE: usize = 3;

/// Radius of the hub ring for a catalog with `total` services. Grows with
/// the catalog so hub markers keep clear of each other, floor of 1.0.
pub fn hub_ring_radius(params: &LayoutParams, total: usize) -> f64 {
	(params.base_ring_radius + params.ring_growth * total as f64).max(1.0)
}

/// Place every category hub and service leaf of `catalog`.
///
/// Pure given the RNG: seed it for reproducible jitter, or zero
/// `params.jitter` to get exact band geometry. Runs once at startup; the
/// result is immutable for the rest of the session.
pub fn compute_layout(
	catalog: &Catalog,
	params: &LayoutParams,
	rng: &mut impl Rng,
) -> EcosystemMap {
	let total = catalog.total_service_count();
	let ring = hub_ring_radius(params, total);
	let hub_step = 2.0 * PI / catalog.categories.len().max(1) as f64;

	let hubs: Vec<CategoryHub> = catalog
		.categories
		.iter()
		.enumerate()
		.map(|(i, category)| {
			let angle = i as f64 * hub_step;
			CategoryHub {
				category_id: category.id.clone(),
				x: 0.5 + ring * angle.cos(),
				y: 0.5 + ring * angle.sin(),
			}
		})
		.collect();

	let mut nodes = Vec::with_capacity(total);
	for (category, hub) in catalog.categories.iter().zip(&hubs) {
		let entries = catalog.services_for(&category.id);
		let count = entries.len();
		let angle_step = 2.0 * PI / count.max(1) as f64;
		let radius_step = if count > 5 { 0.08 } else { 0.06 };
		let max_radius = params.base_node_radius + radius_step * count.div_ceil(BAND_SIZE) as f64;

		for (i, entry) in entries.iter().enumerate() {
			let angle = i as f64 * angle_step;
			let band = (i / BAND_SIZE) as f64;
			let radius = (params.base_node_radius + radius_step * band).min(max_radius);
			nodes.push(ServiceNode {
				id: format!("{}-{}", category.id, i),
				name: entry.name.clone(),
				description: entry.description.clone(),
				url: entry.url.clone(),
				logo: entry.logo.clone(),
				category_id: category.id.clone(),
				x: hub.x + radius * angle.cos() + jitter(params, rng),
				y: hub.y + radius * angle.sin() + jitter(params, rng),
				shape: entry.shape,
			});
		}
	}

	EcosystemMap {
		categories: catalog.categories.clone(),
		hubs,
		nodes,
	}
}

fn jitter(params: &LayoutParams, rng: &mut impl Rng) -> f64 {
	if params.jitter > 0.0 {
		rng.gen_range(-params.jitter..params.jitter)
	} else {
		0.0
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::ecosystem_map::types::{Category, ServiceEntry, Shape};

	const EPS: f64 = 1e-9;

	fn exact() -> LayoutParams {
		LayoutParams {
			jitter: 0.0,
			..LayoutParams::default()
		}
	}

	fn rng() -> StdRng {
		StdRng::seed_from_u64(7)
	}

	fn catalog(counts: &[usize]) -> Catalog {
		let categories: Vec<Category> = counts
			.iter()
			.enumerate()
			.map(|(i, _)| Category {
				id: format!("cat{i}"),
				name: format!("Category {i}"),
				color: "#0079d6".into(),
			})
			.collect();
		let services = counts
			.iter()
			.enumerate()
			.map(|(i, &count)| {
				let entries = (0..count)
					.map(|j| ServiceEntry {
						name: format!("svc{i}-{j}"),
						description: String::new(),
						url: "https://example.com".into(),
						logo: "/logos/example.png".into(),
						shape: Shape::Circle,
					})
					.collect();
				(format!("cat{i}"), entries)
			})
			.collect();
		Catalog::new(categories, services)
	}

	fn hub_angle(hub: &CategoryHub) -> f64 {
		(hub.y - 0.5).atan2(hub.x - 0.5).rem_euclid(2.0 * PI)
	}

	#[test]
	fn hubs_are_equally_spaced() {
		for n in [1usize, 2, 12] {
			let counts = vec![1usize; n];
			let map = compute_layout(&catalog(&counts), &exact(), &mut rng());
			assert_eq!(map.hubs.len(), n);
			let step = 2.0 * PI / n as f64;
			for (i, hub) in map.hubs.iter().enumerate() {
				let expected = (i as f64 * step).rem_euclid(2.0 * PI);
				assert!(
					(hub_angle(hub) - expected).abs() < EPS,
					"hub {i} of {n} at wrong angle"
				);
			}
		}
	}

	#[test]
	fn ring_radius_grows_with_catalog() {
		let params = exact();
		let mut last = 0.0;
		for total in [0usize, 5, 10, 20, 60, 200] {
			let r = hub_ring_radius(&params, total);
			assert!(r >= last);
			assert!(r >= 1.0);
			last = r;
		}
		assert_eq!(hub_ring_radius(&params, 60), 0.8 + 0.02 * 60.0);
	}

	#[test]
	fn leaves_are_equally_fanned() {
		for count in [1usize, 3, 7] {
			let map = compute_layout(&catalog(&[count]), &exact(), &mut rng());
			let hub = &map.hubs[0];
			let step = 2.0 * PI / count as f64;
			for (i, node) in map.nodes.iter().enumerate() {
				let angle = (node.y - hub.y).atan2(node.x - hub.x).rem_euclid(2.0 * PI);
				let expected = (i as f64 * step).rem_euclid(2.0 * PI);
				let diff = (angle - expected).abs();
				assert!(
					diff < EPS || (diff - 2.0 * PI).abs() < EPS,
					"leaf {i} of {count} at wrong angle"
				);
			}
		}
	}

	#[test]
	fn leaves_band_outward_in_threes() {
		let map = compute_layout(&catalog(&[7]), &exact(), &mut rng());
		let hub = &map.hubs[0];
		let distance = |i: usize| {
			let node = &map.nodes[i];
			((node.x - hub.x).powi(2) + (node.y - hub.y).powi(2)).sqrt()
		};
		// 7 > 5 services, so bands step by 0.08
		for i in 0..3 {
			assert!((distance(i) - 0.35).abs() < EPS);
		}
		for i in 3..6 {
			assert!((distance(i) - 0.43).abs() < EPS);
		}
		assert!((distance(6) - 0.51).abs() < EPS);
	}

	#[test]
	fn empty_category_keeps_its_hub_slot() {
		let mut counts = vec![4usize; 12];
		counts[5] = 0;
		let map = compute_layout(&catalog(&counts), &exact(), &mut rng());
		assert_eq!(map.hubs.len(), 12);
		let hub = map.hub("cat5").expect("empty category still has a hub");
		let expected = 5.0 * 2.0 * PI / 12.0;
		assert!((hub_angle(hub) - expected).abs() < EPS);
		assert_eq!(map.nodes_of("cat5").count(), 0);
	}

	#[test]
	fn ghost_category_entries_never_become_nodes() {
		let base = catalog(&[3]);
		let ghost_entry = ServiceEntry {
			name: "lost".into(),
			description: String::new(),
			url: "https://example.com".into(),
			logo: "/logos/lost.png".into(),
			shape: Shape::Circle,
		};
		let catalog = Catalog::new(
			base.categories.clone(),
			vec![
				("cat0".into(), vec![ghost_entry.clone(); 3]),
				("ghost".into(), vec![ghost_entry]),
			],
		);
		let map = compute_layout(&catalog, &exact(), &mut rng());
		assert_eq!(map.nodes.len(), 3);
		assert!(map.nodes.iter().all(|n| n.category_id == "cat0"));
	}

	#[test]
	fn node_ids_are_unique_and_composed() {
		let map = compute_layout(&catalog(&[4, 9, 1]), &exact(), &mut rng());
		let ids: HashSet<&str> = map.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), map.nodes.len());
		assert!(ids.contains("cat1-8"));
		assert!(ids.contains("cat2-0"));
	}

	#[test]
	fn jitter_stays_within_amplitude_and_is_seed_stable() {
		let params = LayoutParams::default();
		let a = compute_layout(&catalog(&[6, 6]), &params, &mut StdRng::seed_from_u64(42));
		let b = compute_layout(&catalog(&[6, 6]), &params, &mut StdRng::seed_from_u64(42));
		let flat = compute_layout(&catalog(&[6, 6]), &exact(), &mut rng());
		for ((ja, jb), base) in a.nodes.iter().zip(&b.nodes).zip(&flat.nodes) {
			assert_eq!(ja.x, jb.x);
			assert_eq!(ja.y, jb.y);
			assert!((ja.x - base.x).abs() < params.jitter);
			assert!((ja.y - base.y).abs() < params.jitter);
		}
	}
}
