//! Spanning tree counting (Kirchhoff's matrix-tree theorem)
//!
//! The number of spanning trees equals any cofactor of the Laplacian
//!
//! ```text
//! L[i][i] = degree(i)         (parallel edges counted, self-loops ignored)
//! L[i][j] = -multiplicity(i, j)
//! ```
//!
//! The reduced matrix (last row and column deleted) has an integer determinant that
//! outgrows `f64` precision around 16 vertices. It is therefore computed exactly modulo
//! four primes near `2^60` and reassembled by the Chinese remainder theorem, which is exact
//! for every count below the primes' product (about `2^242`). A floating-point
//! determinant with partial pivoting is kept as a magnitude estimate.

use super::connectivity::connected_components;
use crate::config::AnalysisConfig;
use crate::error::{GraphError, Result};
use crate::storage::Graph;

/// Primes whose product bounds every exactly reconstructed count
const MODULI: [u64; 4] = [
    (1 << 59) - 55,
    (1 << 60) - 93,
    (1 << 61) - 1,
    (1 << 62) - 57,
];

/// `log2` of the product of [`MODULI`], rounded down
const MODULUS_BITS: f64 = 241.0;

/// Estimated magnitude below which a count is certainly under the product of [`MODULI`]
const ESTIMATE_LIMIT_BITS: i32 = 200;

/// Count spanning trees with the default numeric tolerance
///
/// Returns 0 for the empty graph or a disconnected one and 1 for a single vertex. A count
/// larger than `u128::MAX` saturates (and logs a warning); use
/// [`count_spanning_trees_with`] to get an error instead.
///
/// # Example
///
/// ```
/// use graph_oracle::{count_spanning_trees, Graph, RawGraph};
///
/// // Cayley: K4 has 4^2 = 16 spanning trees
/// let raw = RawGraph::from_lists([(1, vec![2, 3, 4]), (2, vec![3, 4]), (3, vec![4])]);
/// assert_eq!(count_spanning_trees(&Graph::from_raw(&raw)), 16);
/// ```
#[must_use]
pub fn count_spanning_trees(graph: &Graph) -> u128 {
    match spanning_tree_count(graph, &AnalysisConfig::default()) {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!(%err, "spanning tree count saturated at u128::MAX");
            u128::MAX
        }
    }
}

/// Count spanning trees with an explicit [`AnalysisConfig`]
///
/// The count itself is exact. `determinant_tolerance` bounds the relative drift allowed
/// between the floating-point estimate and the exact count before a warning is logged.
///
/// # Errors
///
/// Returns [`GraphError::InvalidConfig`] if the config fails validation, or
/// [`GraphError::Overflow`] if the count exceeds `u128::MAX`
pub fn count_spanning_trees_with(graph: &Graph, config: &AnalysisConfig) -> Result<u128> {
    config.validate()?;
    spanning_tree_count(graph, config)
}

fn spanning_tree_count(graph: &Graph, config: &AnalysisConfig) -> Result<u128> {
    match graph.num_vertices() {
        0 => return Ok(0),
        1 => return Ok(1),
        _ => {}
    }
    if connected_components(graph) != 1 {
        return Ok(0);
    }

    let laplacian = reduced_laplacian(graph);
    let estimate = determinant(&laplacian).abs();

    // Residues only pin down counts below the moduli product
    let estimate_in_range = estimate < 2f64.powi(ESTIMATE_LIMIT_BITS);
    if !estimate_in_range && degree_bound_bits(graph) >= MODULUS_BITS {
        return Err(GraphError::Overflow("spanning tree count"));
    }

    let residues = MODULI.map(|p| determinant_mod(&laplacian, p));
    let count = reconstruct(&residues).ok_or(GraphError::Overflow("spanning tree count"))?;

    #[allow(clippy::cast_precision_loss)]
    let exact = count as f64;
    let drift = (estimate - exact).abs();
    if drift > config.determinant_tolerance * exact.max(1.0) {
        tracing::warn!(
            estimate,
            count = %count,
            drift,
            "floating-point determinant drifted from the exact spanning tree count"
        );
    }

    Ok(count)
}

/// Laplacian without its last row and column
fn reduced_laplacian(graph: &Graph) -> Vec<Vec<i64>> {
    let size = graph.num_vertices() - 1;
    let mut matrix = vec![vec![0i64; size]; size];

    for edge in graph.edges().iter().filter(|e| !e.is_loop()) {
        let (a, b) = (edge.source, edge.target);
        if a < size {
            matrix[a][a] += 1;
        }
        if b < size {
            matrix[b][b] += 1;
        }
        if a < size && b < size {
            matrix[a][b] -= 1;
            matrix[b][a] -= 1;
        }
    }

    matrix
}

/// `log2` of the product of the reduced rows' degrees, an upper bound on the count
fn degree_bound_bits(graph: &Graph) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    (0..graph.num_vertices() - 1)
        .map(|v| (graph.incident(v).len().max(1) as f64).log2())
        .sum()
}

/// Floating-point determinant by Gaussian elimination with partial pivoting
fn determinant(laplacian: &[Vec<i64>]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let mut matrix: Vec<Vec<f64>> = laplacian
        .iter()
        .map(|row| row.iter().map(|&x| x as f64).collect())
        .collect();
    let size = matrix.len();
    let mut det = 1.0;

    for col in 0..size {
        let pivot = (col..size)
            .max_by(|&x, &y| matrix[x][col].abs().total_cmp(&matrix[y][col].abs()))
            .unwrap_or(col);
        if matrix[pivot][col].abs() < f64::EPSILON {
            return 0.0;
        }
        if pivot != col {
            matrix.swap(pivot, col);
            det = -det;
        }

        det *= matrix[col][col];
        for row in col + 1..size {
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..size {
                matrix[row][k] -= factor * matrix[col][k];
            }
        }
    }

    det
}

/// Determinant modulo the prime `p` by Gaussian elimination over `Z/p`
fn determinant_mod(laplacian: &[Vec<i64>], p: u64) -> u64 {
    let mut rows: Vec<Vec<u64>> = laplacian
        .iter()
        .map(|row| row.iter().map(|&x| reduce(x, p)).collect())
        .collect();
    let size = rows.len();
    let mut det = 1;

    for col in 0..size {
        let Some(pivot) = (col..size).find(|&r| rows[r][col] != 0) else {
            return 0;
        };
        if pivot != col {
            rows.swap(pivot, col);
            det = (p - det) % p;
        }

        det = mul_mod(det, rows[col][col], p);
        let inverse = pow_mod(rows[col][col], p - 2, p);
        for row in col + 1..size {
            let factor = mul_mod(rows[row][col], inverse, p);
            if factor == 0 {
                continue;
            }
            for k in col..size {
                let delta = mul_mod(factor, rows[col][k], p);
                rows[row][k] = (rows[row][k] + p - delta) % p;
            }
        }
    }

    det
}

/// Garner's mixed-radix reconstruction; `None` if the value exceeds `u128::MAX`
fn reconstruct(residues: &[u64; 4]) -> Option<u128> {
    let mut digits = [0u64; 4];
    for (i, &p) in MODULI.iter().enumerate() {
        let mut digit = residues[i];
        for (j, &q) in MODULI[..i].iter().enumerate() {
            let lower = digits[j] % p;
            digit = mul_mod((digit + p - lower) % p, pow_mod(q % p, p - 2, p), p);
        }
        digits[i] = digit;
    }

    digits
        .iter()
        .zip(MODULI)
        .rev()
        .try_fold(0u128, |value, (&digit, p)| {
            value.checked_mul(u128::from(p))?.checked_add(u128::from(digit))
        })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn reduce(x: i64, p: u64) -> u64 {
    i128::from(x).rem_euclid(i128::from(p)) as u64
}

#[allow(clippy::cast_possible_truncation)]
fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(p)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, p: u64) -> u64 {
    let mut result = 1 % p;
    base %= p;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, p);
        }
        base = mul_mod(base, base, p);
        exp >>= 1;
    }
    result
}
