use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::triconnected_blocks::outside_structures::{Component, SkeletonKind};

/// Merges bonds sharing a virtual edge into one bond, and polygons sharing a
/// virtual edge into one polygon. The shared virtual edges disappear.
///
/// Triconnected components are returned untouched.
pub(crate) fn merge_components(
    edge_count: usize,
    split_components: Vec<Component>,
) -> Vec<Component> {
    let mut owners: Vec<Vec<usize>> = vec![Vec::new(); edge_count];
    for (i, component) in split_components.iter().enumerate() {
        for &eid in &component.edges {
            owners[eid].push(i);
        }
    }

    let mut merged = FixedBitSet::with_capacity(split_components.len());
    let mut group_of = vec![usize::MAX; split_components.len()];
    let mut ret = Vec::new();

    for i in 0..split_components.len() {
        if merged[i] {
            continue;
        }
        merged.insert(i);

        let kind = split_components[i].kind;
        if kind == Some(SkeletonKind::Rigid) {
            ret.push(split_components[i].clone());
            continue;
        }

        // all components of the same kind reachable through shared edges
        let mut group = vec![i];
        group_of[i] = i;
        let mut queue = VecDeque::from([i]);
        while let Some(c) = queue.pop_front() {
            for &eid in &split_components[c].edges {
                for &other in &owners[eid] {
                    if !merged[other] && split_components[other].kind == kind {
                        merged.insert(other);
                        group_of[other] = i;
                        group.push(other);
                        queue.push_back(other);
                    }
                }
            }
        }

        let mut component = Component::new(kind);
        for &c in &group {
            for &eid in &split_components[c].edges {
                let shared_inside = owners[eid].len() == 2
                    && owners[eid].iter().all(|&owner| group_of[owner] == i);
                if !shared_inside {
                    component.edges.push(eid);
                }
            }
        }
        ret.push(component);
    }

    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(kind: SkeletonKind, edges: &[usize]) -> Component {
        Component {
            edges: edges.to_vec(),
            kind: Some(kind),
        }
    }

    #[test]
    fn test_polygons_chain_into_one() {
        // three triangles glued by virtual edges 5 and 6, plus a bond on edge 7
        let components = vec![
            component(SkeletonKind::Series, &[0, 1, 5]),
            component(SkeletonKind::Series, &[5, 2, 6]),
            component(SkeletonKind::Series, &[6, 3, 7]),
            component(SkeletonKind::Parallel, &[7, 4, 8]),
            component(SkeletonKind::Parallel, &[8, 9, 10]),
        ];

        let merged = merge_components(11, components);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].kind, Some(SkeletonKind::Series));
        let mut series = merged[0].edges.clone();
        series.sort();
        assert_eq!(series, vec![0, 1, 2, 3, 7]);

        assert_eq!(merged[1].kind, Some(SkeletonKind::Parallel));
        let mut bond = merged[1].edges.clone();
        bond.sort();
        assert_eq!(bond, vec![4, 7, 9, 10]);
    }

    #[test]
    fn test_rigid_components_are_kept() {
        let components = vec![
            component(SkeletonKind::Rigid, &[0, 1, 2, 3, 4, 6]),
            component(SkeletonKind::Rigid, &[6, 5, 7, 8, 9, 10]),
        ];

        let merged = merge_components(11, components);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].edges, vec![0, 1, 2, 3, 4, 6]);
        assert_eq!(merged[1].edges, vec![6, 5, 7, 8, 9, 10]);
    }
}
