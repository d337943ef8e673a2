use rayon::prelude::*;

use crate::graphs::graph::Graph;

/// Dense square matrix of path counts, row-major.
pub type CountMatrix = Vec<Vec<u64>>;

/// 0/1 adjacency matrix with rows and columns in `order`.
///
/// Entry `[i][j]` is 1 when `order[i]` is adjacent to `order[j]`. Nodes of
/// `order` missing from the graph give zero rows and columns.
pub fn adjacency_matrix<G: Graph>(graph: &G, order: &[G::Node]) -> CountMatrix {
    order
        .iter()
        .map(|&from| {
            order
                .iter()
                .map(|&to| u64::from(graph.adjacent(from, to)))
                .collect()
        })
        .collect()
}

/// Powers `A, A², ..., A^max_power` of the adjacency matrix over `order`.
///
/// Entry `[i][j]` of `A^k` counts the walks of length `k` from `order[i]` to
/// `order[j]`, saturating at `u64::MAX`. Each product costs `O(n³)`, so this
/// is meant for small node counts only. Rows are multiplied in parallel.
pub fn adjacency_matrix_powers<G: Graph>(
    graph: &G,
    order: &[G::Node],
    max_power: usize,
) -> Vec<CountMatrix> {
    let mut powers = Vec::with_capacity(max_power);
    if max_power == 0 {
        return powers;
    }

    let adjacency = adjacency_matrix(graph, order);
    let mut current = adjacency.clone();
    for _ in 1..max_power {
        let next = multiply(&current, &adjacency);
        powers.push(current);
        current = next;
    }
    powers.push(current);
    powers
}

fn multiply(left: &CountMatrix, right: &CountMatrix) -> CountMatrix {
    let n = right.len();
    left.par_iter()
        .map(|row| {
            (0..n)
                .map(|j| {
                    row.iter()
                        .zip(right)
                        .filter(|&(&a, _)| a != 0)
                        .fold(0u64, |acc, (&a, right_row)| {
                            acc.saturating_add(a.saturating_mul(right_row[j]))
                        })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::factory::create_graph;

    #[test]
    fn triangle_walk_counts() {
        let g = create_graph(false, 0..3u8, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let powers = adjacency_matrix_powers(&g, &[0, 1, 2], 3);

        assert_eq!(powers.len(), 3);
        assert_eq!(powers[0], vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
        assert_eq!(powers[1], vec![vec![2, 1, 1], vec![1, 2, 1], vec![1, 1, 2]]);
        assert_eq!(powers[2][0], vec![2, 3, 3]);
    }

    #[test]
    fn directed_path_and_custom_order() {
        // 0 -> 1 -> 2, matrix over [2, 1, 0, 9]
        let g = create_graph(true, 0..3u8, [(0, 1), (1, 2)]).unwrap();
        let order = [2, 1, 0, 9];

        let a = adjacency_matrix(&g, &order);
        assert_eq!(a[2], vec![0, 1, 0, 0], "row of node 0");
        assert_eq!(a[3], vec![0, 0, 0, 0], "absent node");

        let powers = adjacency_matrix_powers(&g, &order, 3);
        assert_eq!(powers[1][2][0], 1, "one walk 0 -> 2 of length 2");
        assert!(powers[2].iter().flatten().all(|&c| c == 0), "no walk of length 3");
    }

    #[test]
    fn zero_power_is_empty() {
        let g = create_graph(false, 0..2u8, [(0, 1)]).unwrap();
        assert!(adjacency_matrix_powers(&g, &[0, 1], 0).is_empty());
    }

    #[test]
    fn counts_saturate() {
        // complete graph with loops on 40 nodes: entries grow as 40^(k-1)
        let nodes: Vec<u16> = (0..40).collect();
        let edges: Vec<(u16, u16)> = nodes
            .iter()
            .flat_map(|&a| nodes.iter().map(move |&b| (a, b)))
            .collect();
        let g = create_graph(true, nodes.clone(), edges).unwrap();
        let powers = adjacency_matrix_powers(&g, &nodes, 14);

        assert_eq!(powers[13][0][0], u64::MAX);
    }
}
