//! Helpers that turn the raw output of a mesh loader into what the scene needs.

use super::{PhongMaterial, Shape};
use crate::{math::Vector3, SceneError};

/// Move the mesh so its bounding box is centered on the origin, and scale it uniformly so the
/// largest axis spans `[-1, 1]`.
pub fn normalize_positions(positions: &mut [Vector3]) -> Result<(), SceneError> {
    let first = *positions.first().ok_or(SceneError::DegenerateGeometry {
        what: "the mesh has no vertices",
    })?;
    let (min, max) = positions
        .iter()
        .fold((first, first), |(min, max), &p| {
            (min.memberwise_min(p), max.memberwise_max(p))
        });

    let center = (min + max) / 2.0;
    let extent = max - min;
    let greatest = extent.x.max(extent.y).max(extent.z);
    if !greatest.is_finite() || greatest <= 0.0 {
        return Err(SceneError::DegenerateGeometry {
            what: "the mesh has no extent",
        });
    }

    let half = greatest / 2.0;
    for position in positions.iter_mut() {
        *position = (*position - center) / half;
    }
    Ok(())
}

/// Group the vertices of a mesh by material.
///
/// `material_ids` holds the material of every vertex (`None` for vertices without one). The
/// result has one shape per material that is used by at least one vertex, in material order.
pub fn split_by_material(
    material_ids: &[Option<usize>],
    materials: &[PhongMaterial],
) -> Vec<Shape> {
    let mut counts = vec![0usize; materials.len()];
    for id in material_ids.iter().flatten() {
        match counts.get_mut(*id) {
            Some(count) => *count += 1,
            None => log::warn!("Vertex refers to unknown material {}", id),
        }
    }

    counts
        .into_iter()
        .zip(materials)
        .filter(|(count, _)| *count > 0)
        .map(|(vertex_count, material)| Shape {
            vertex_count,
            material: material.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn positions_are_centered_and_fit_the_unit_cube() {
        let mut positions = vec![
            Vector3::new(2.0, 10.0, 5.0),
            Vector3::new(6.0, 12.0, 5.0),
            Vector3::new(4.0, 11.0, 6.0),
        ];
        normalize_positions(&mut positions).unwrap();
        // largest extent is x (4), so everything is divided by 2 after centering on (4, 11, 5.5)
        assert_abs_diff_eq!(positions[0], Vector3::new(-1.0, -0.5, -0.25));
        assert_abs_diff_eq!(positions[1], Vector3::new(1.0, 0.5, -0.25));
        assert_abs_diff_eq!(positions[2], Vector3::new(0.0, 0.0, 0.25));
    }

    #[test]
    fn flat_or_empty_meshes_are_rejected() {
        let mut single = vec![Vector3::new(1.0, 1.0, 1.0); 3];
        assert!(normalize_positions(&mut single).is_err());
        assert!(normalize_positions(&mut []).is_err());
    }

    #[test]
    fn vertices_are_grouped_per_used_material() {
        let red = PhongMaterial {
            kd: Vector3::new(1.0, 0.0, 0.0),
            ..PhongMaterial::default()
        };
        let unused = PhongMaterial::default();
        let blue = PhongMaterial {
            kd: Vector3::new(0.0, 0.0, 1.0),
            ..PhongMaterial::default()
        };
        let ids = [Some(2), Some(0), Some(2), None, Some(2), Some(7)];
        let shapes = split_by_material(&ids, &[red.clone(), unused, blue.clone()]);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].vertex_count, 1);
        assert_eq!(shapes[0].material, red);
        assert_eq!(shapes[1].vertex_count, 3);
        assert_eq!(shapes[1].material, blue);
    }
}
