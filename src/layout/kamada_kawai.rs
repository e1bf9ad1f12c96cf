use log::{debug, info};
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Layout, Point};
use crate::config::LayoutConfig;
use crate::graph::MentionGraph;

const SPRING_CONSTANT: f64 = 1.0;
const NEWTON_STEPS: usize = 100;
const MIN_DISTANCE: f64 = 1e-9;

/// Kamada-Kawai layout: vertices are joined by springs whose rest length is
/// proportional to their graph distance, and the total spring energy is
/// minimized one vertex at a time.
///
/// Graph distance is the shorter of the two directed hop counts, capped at
/// `diameter * disconnected_distance_multiplier` so that separate components
/// are not pushed arbitrarily far apart.
pub struct KamadaKawai {
	width: f64,
	height: f64,
	n: usize,
	positions: Vec<Point>,
	distances: Vec<f64>,
	ideal_length: f64,
	exchange_vertices: bool,
	max_iterations: usize,
	epsilon: f64,
	iteration: usize,
}

impl KamadaKawai {
	/// Prepares the distance matrix and a seeded random starting placement.
	pub fn new(graph: &MentionGraph, config: &LayoutConfig) -> Self {
		let n = graph.vertex_count();
		let mut rng = StdRng::seed_from_u64(config.seed);
		let positions = (0..n)
			.map(|_| {
				Point::new(
					rng.random::<f64>() * config.width,
					rng.random::<f64>() * config.height,
				)
			})
			.collect();

		let hops: Vec<_> = (0..n)
			.map(|i| dijkstra(graph.as_digraph(), NodeIndex::new(i), None, |_| 1usize))
			.collect();
		let diameter = hops
			.iter()
			.flat_map(|h| h.values())
			.copied()
			.max()
			.unwrap_or(0)
			.max(1) as f64;
		let cap = diameter * config.disconnected_distance_multiplier;

		let mut distances = vec![0.0; n * n];
		for i in 0..n {
			for j in i + 1..n {
				let (vi, vj) = (NodeIndex::new(i), NodeIndex::new(j));
				let d = [hops[i].get(&vj), hops[j].get(&vi)]
					.into_iter()
					.flatten()
					.fold(cap, |acc, &h| acc.min(h as f64));
				distances[i * n + j] = d;
				distances[j * n + i] = d;
			}
		}

		let ideal_length = config.width.min(config.height) / diameter * config.length_factor;
		debug!("kamada-kawai: diameter {diameter}, unit length {ideal_length:.1}");

		Self {
			width: config.width,
			height: config.height,
			n,
			positions,
			distances,
			ideal_length,
			exchange_vertices: config.exchange_vertices,
			max_iterations: config.max_iterations,
			epsilon: config.epsilon,
			iteration: 0,
		}
	}

	/// Runs steps until settled or out of iterations, then centers the result.
	pub fn run(mut self) -> Layout {
		let initial = self.energy();
		while self.step() {}
		self.adjust_for_gravity();
		info!(
			"kamada-kawai: {} vertices, {} iterations, energy {:.1} -> {:.1}",
			self.n,
			self.iteration,
			initial,
			self.energy()
		);
		self.into_layout()
	}

	/// One optimization step. Returns `false` once there is nothing left to do.
	pub fn step(&mut self) -> bool {
		if self.n == 0 || self.iteration >= self.max_iterations {
			return false;
		}
		self.iteration += 1;

		let mut worst: Option<(usize, f64)> = None;
		for i in 0..self.n {
			let delta = self.delta_m(i);
			if delta > worst.map_or(0.0, |(_, d)| d) {
				worst = Some((i, delta));
			}
		}
		let Some((m, max_delta)) = worst else {
			return false;
		};

		for _ in 0..NEWTON_STEPS {
			let (dx, dy) = self.delta_xy(m);
			if !(dx.is_finite() && dy.is_finite()) {
				break;
			}
			self.positions[m].x += dx;
			self.positions[m].y += dy;
			if self.delta_m(m) < self.epsilon {
				break;
			}
		}
		self.adjust_for_gravity();

		if max_delta >= self.epsilon {
			return true;
		}
		self.exchange_vertices && self.try_exchange()
	}

	/// Steps taken so far.
	pub fn iterations(&self) -> usize {
		self.iteration
	}

	/// Total spring energy of the current placement.
	pub fn energy(&self) -> f64 {
		self.energy_of(&self.positions)
	}

	/// Target graph distance between vertices `i` and `j`, in hops.
	pub fn distance(&self, i: NodeIndex, j: NodeIndex) -> f64 {
		self.distances[i.index() * self.n + j.index()]
	}

	/// Spring rest length for a pair one hop apart.
	pub fn ideal_length(&self) -> f64 {
		self.ideal_length
	}

	/// Current placement.
	pub fn into_layout(self) -> Layout {
		Layout::new(self.width, self.height, self.positions)
	}

	/// Swaps the first pair whose exchange lowers the energy.
	fn try_exchange(&mut self) -> bool {
		let energy = self.energy();
		let mut trial = self.positions.clone();
		for i in 0..self.n.saturating_sub(1) {
			for j in i + 1..self.n {
				trial.swap(i, j);
				if self.energy_of(&trial) < energy {
					debug!("kamada-kawai: exchanged vertices {i} and {j}");
					self.positions = trial;
					return true;
				}
				trial.swap(i, j);
			}
		}
		false
	}

	fn spring(&self, i: usize, j: usize) -> (f64, f64) {
		let dist = self.distances[i * self.n + j];
		(self.ideal_length * dist, SPRING_CONSTANT / (dist * dist))
	}

	fn offset(positions: &[Point], a: usize, b: usize) -> (f64, f64, f64) {
		let (dx, dy) = (positions[a].x - positions[b].x, positions[a].y - positions[b].y);
		(dx, dy, dx.hypot(dy).max(MIN_DISTANCE))
	}

	/// Magnitude of the energy gradient at vertex `m`.
	fn delta_m(&self, m: usize) -> f64 {
		let (mut dx_sum, mut dy_sum) = (0.0, 0.0);
		for i in (0..self.n).filter(|&i| i != m) {
			let (l, k) = self.spring(m, i);
			let (dx, dy, d) = Self::offset(&self.positions, m, i);
			let common = k * (1.0 - l / d);
			dx_sum += common * dx;
			dy_sum += common * dy;
		}
		dx_sum.hypot(dy_sum)
	}

	/// Newton-Raphson move for vertex `m`.
	fn delta_xy(&self, m: usize) -> (f64, f64) {
		let (mut de_dx, mut de_dy) = (0.0, 0.0);
		let (mut d2e_dx2, mut d2e_dxdy, mut d2e_dy2) = (0.0, 0.0, 0.0);
		for i in (0..self.n).filter(|&i| i != m) {
			let (l, k) = self.spring(m, i);
			let (dx, dy, d) = Self::offset(&self.positions, m, i);
			let ddd = d * d * d;
			de_dx += k * (1.0 - l / d) * dx;
			de_dy += k * (1.0 - l / d) * dy;
			d2e_dx2 += k * (1.0 - l * dy * dy / ddd);
			d2e_dxdy += k * l * dx * dy / ddd;
			d2e_dy2 += k * (1.0 - l * dx * dx / ddd);
		}
		let denominator = d2e_dx2 * d2e_dy2 - d2e_dxdy * d2e_dxdy;
		(
			(d2e_dxdy * de_dy - d2e_dy2 * de_dx) / denominator,
			(d2e_dxdy * de_dx - d2e_dx2 * de_dy) / denominator,
		)
	}

	fn energy_of(&self, positions: &[Point]) -> f64 {
		let mut energy = 0.0;
		for i in 0..self.n {
			for j in i + 1..self.n {
				let (l, k) = self.spring(i, j);
				let (dx, dy, d) = Self::offset(positions, i, j);
				energy += k / 2.0 * (dx * dx + dy * dy + l * l - 2.0 * l * d);
			}
		}
		energy
	}

	/// Moves the centroid to the canvas center.
	fn adjust_for_gravity(&mut self) {
		if self.n == 0 {
			return;
		}
		let (sx, sy) = self
			.positions
			.iter()
			.fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
		let (shift_x, shift_y) = (
			self.width / 2.0 - sx / self.n as f64,
			self.height / 2.0 - sy / self.n as f64,
		);
		for p in &mut self.positions {
			p.x += shift_x;
			p.y += shift_y;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::parse_graph;

	fn graph(text: &str) -> MentionGraph {
		parse_graph(text).unwrap()
	}

	fn centroid(layout: &Layout) -> Point {
		let n = layout.len() as f64;
		let (sx, sy) = layout
			.positions()
			.iter()
			.fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
		Point::new(sx / n, sy / n)
	}

	#[test]
	fn distances_use_either_direction_and_cap_disconnected_pairs() {
		let g = graph("A\tB\t1\nB\tC\t1\nD\tE\t1");
		let kk = KamadaKawai::new(&g, &LayoutConfig::default());
		let v = |label: &str| g.vertex(label).unwrap();

		// diameter 2, cap 2 * 0.68
		assert_eq!(kk.distance(v("A"), v("B")), 1.0);
		assert_eq!(kk.distance(v("B"), v("A")), 1.0);
		assert_eq!(kk.distance(v("C"), v("B")), 1.0);
		assert!((kk.distance(v("A"), v("C")) - 1.36).abs() < 1e-12);
		assert!((kk.distance(v("A"), v("D")) - 1.36).abs() < 1e-12);
		assert!((kk.distance(v("E"), v("C")) - 1.36).abs() < 1e-12);
		assert!((kk.ideal_length() - 1080.0 / 2.0 * 0.9).abs() < 1e-9);
	}

	#[test]
	fn edgeless_graph_uses_unit_diameter() {
		let mut g = MentionGraph::new();
		g.add_vertex("A");
		g.add_vertex("B");
		let kk = KamadaKawai::new(&g, &LayoutConfig::default());
		assert!((kk.distance(NodeIndex::new(0), NodeIndex::new(1)) - 0.68).abs() < 1e-12);
		let layout = kk.run();
		assert!(layout.positions().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
	}

	#[test]
	fn single_vertex_lands_in_the_center() {
		let g = graph("A\tA\t3");
		let layout = KamadaKawai::new(&g, &LayoutConfig::default()).run();
		assert_eq!(layout.len(), 1);
		assert!(layout.positions()[0].distance(Point::new(900.0, 540.0)) < 1e-9);
	}

	#[test]
	fn two_connected_vertices_settle_at_capped_length() {
		let g = graph("A\tB\t10");
		let kk = KamadaKawai::new(&g, &LayoutConfig::default());
		// diameter 1 caps every pair, connected ones included, at 0.68 hops
		assert!((kk.distance(NodeIndex::new(0), NodeIndex::new(1)) - 0.68).abs() < 1e-12);
		let layout = kk.run();
		let d = layout.positions()[0].distance(layout.positions()[1]);
		assert!((d - 1080.0 * 0.9 * 0.68).abs() < 1.0, "distance {d}");
	}

	#[test]
	fn result_is_centered_and_lower_energy() {
		let g = graph("A\tB\t10\nB\tC\t8\nA\tC\t10\nC\tD\t7\nD\tE\t9\nX\tY\t12");
		let config = LayoutConfig::default();
		let kk = KamadaKawai::new(&g, &config);
		let initial = kk.energy();
		let mut kk = kk;
		while kk.step() {}
		assert!(kk.energy() <= initial);
		assert!(kk.iterations() <= config.max_iterations);

		let layout = kk.into_layout();
		let c = centroid(&layout);
		assert!(c.distance(layout.center()) < 1e-6, "centroid {c:?}");
	}

	#[test]
	fn same_seed_same_picture() {
		let g = graph("A\tB\t10\nB\tC\t8\nA\tC\t10\nC\tA\t7");
		let config = LayoutConfig::default();
		let first = KamadaKawai::new(&g, &config).run();
		let second = KamadaKawai::new(&g, &config).run();
		assert_eq!(first, second);

		let reseeded = LayoutConfig {
			seed: config.seed + 1,
			..config
		};
		assert_ne!(first, KamadaKawai::new(&g, &reseeded).run());
	}

	#[test]
	fn stops_at_max_iterations() {
		let g = graph("A\tB\t1\nB\tC\t1\nC\tD\t1\nD\tE\t1\nE\tA\t1");
		let config = LayoutConfig {
			max_iterations: 3,
			..LayoutConfig::default()
		};
		let mut kk = KamadaKawai::new(&g, &config);
		while kk.step() {}
		assert!(kk.iterations() <= 3);
	}

	#[test]
	fn vertex_exchange_keeps_positions_finite() {
		let g = graph("A\tB\t1\nB\tC\t1\nC\tD\t1\nD\tA\t1\nA\tC\t1");
		let config = LayoutConfig {
			exchange_vertices: true,
			..LayoutConfig::default()
		};
		let layout = KamadaKawai::new(&g, &config).run();
		assert_eq!(layout.len(), 4);
		assert!(layout.positions().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
	}
}
