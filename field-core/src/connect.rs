use crate::field::ParticleField;
use crate::types::ParticleId;

/// A proximity link between two particles, with the stroke opacity
/// already derived from their distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: ParticleId,
    pub b: ParticleId,
    pub distance: f32,
    /// `1 - distance / max_distance`, in `(0, 1]`.
    pub opacity: f32,
}

/// Collects every unordered particle pair closer than `max_distance`.
///
/// Each pair is visited once (`a < b`), so the connection relation is
/// symmetric by construction. The scan is O(n²); acceptable at the
/// bounded particle counts this field is built with. The early reject
/// compares squared distances and the square root is only taken for
/// pairs that actually connect.
pub fn connections(field: &ParticleField, max_distance: f32) -> Vec<Connection> {
    if max_distance <= 0.0 {
        return Vec::new();
    }
    let max_d2 = max_distance * max_distance;
    let mut out = Vec::new();

    for i in 0..field.particles.len() {
        for j in (i + 1)..field.particles.len() {
            let d2 = (field.particles[i].pos - field.particles[j].pos).length_squared();
            if d2 < max_d2 {
                let distance = d2.sqrt();
                out.push(Connection {
                    a: i,
                    b: j,
                    distance,
                    opacity: 1.0 - distance / max_distance,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::COOL_PALETTE;
    use crate::particle::Particle;
    use glam::Vec2;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            pos: Vec2::new(x, y),
            baseline_y: y,
            vel: Vec2::ZERO,
            radius: 1.0,
            color: COOL_PALETTE[0],
        }
    }

    fn field_of(positions: &[(f32, f32)]) -> ParticleField {
        ParticleField::from_parts(
            positions.iter().map(|&(x, y)| particle_at(x, y)).collect(),
            1000.0,
            1000.0,
        )
    }

    #[test]
    fn connects_pairs_under_threshold_only() {
        // (0,0)-(30,40) at distance 50; (500,500) is far from both.
        let field = field_of(&[(0.0, 0.0), (30.0, 40.0), (500.0, 500.0)]);

        let conns = connections(&field, 100.0);
        assert_eq!(conns.len(), 1);

        let c = conns[0];
        assert_eq!((c.a, c.b), (0, 1));
        assert_eq!(c.distance, 50.0);
        assert_eq!(c.opacity, 0.5);
    }

    #[test]
    fn each_pair_appears_once_with_ordered_ids() {
        // Four mutually close particles: C(4, 2) = 6 links.
        let field = field_of(&[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)]);

        let conns = connections(&field, 100.0);
        assert_eq!(conns.len(), 6);

        for c in &conns {
            assert!(c.a < c.b);
        }

        // Connecting is symmetric: swapping the scan order of any pair
        // would yield the same distance and opacity, because both are
        // functions of the unordered pair.
        for c in &conns {
            let d = (field.particles[c.a].pos - field.particles[c.b].pos).length();
            let d_rev = (field.particles[c.b].pos - field.particles[c.a].pos).length();
            assert_eq!(d, d_rev);
            assert_eq!(c.distance, d);
        }
    }

    #[test]
    fn opacity_falls_off_linearly_with_distance() {
        let field = field_of(&[(0.0, 0.0), (25.0, 0.0), (75.0, 0.0)]);

        let conns = connections(&field, 100.0);

        let near = conns
            .iter()
            .find(|c| (c.a, c.b) == (0, 1))
            .expect("near pair connects");
        let far = conns
            .iter()
            .find(|c| (c.a, c.b) == (0, 2))
            .expect("far pair connects");

        assert_eq!(near.opacity, 0.75);
        assert_eq!(far.opacity, 0.25);
        assert!(near.opacity > far.opacity);
    }

    #[test]
    fn distance_at_or_past_threshold_does_not_connect() {
        let field = field_of(&[(0.0, 0.0), (100.0, 0.0)]);
        // Exactly at the threshold: strict comparison, no connection
        // (its opacity would be zero anyway).
        assert!(connections(&field, 100.0).is_empty());
        assert_eq!(connections(&field, 100.1).len(), 1);
    }

    #[test]
    fn degenerate_fields_yield_no_connections() {
        assert!(connections(&ParticleField::empty(), 100.0).is_empty());
        assert!(connections(&field_of(&[(0.0, 0.0)]), 100.0).is_empty());
        assert!(connections(&field_of(&[(0.0, 0.0), (1.0, 0.0)]), 0.0).is_empty());
    }
}
