use crate::apriori::mine;
use crate::config::MiningConfig;
use crate::transaction::from_dense;
use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type PairRuleRow = (usize, usize, usize, f64);
type TripleRuleRow = ((usize, usize), usize, usize, f64);

fn config_from(min_support: i64, top_k: i64) -> PyResult<MiningConfig> {
    let config = MiningConfig::from_signed(min_support, top_k)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(config.with_parallel(true))
}

fn level_array<'py, const K: usize>(
    py: Python<'py>,
    itemsets: impl ExactSizeIterator<Item = [usize; K]>,
) -> PyResult<Bound<'py, PyArray2<usize>>> {
    let rows = itemsets.len();
    let data: Vec<usize> = itemsets.flatten().collect();
    let array = Array2::from_shape_vec((rows, K), data)
        .map_err(|_| PyValueError::new_err("Failed to create array"))?;
    Ok(array.into_pyarray(py))
}

/// Frequent itemsets of a binary transaction matrix, one `(n, k)` array per
/// non-empty level.
#[pyfunction]
#[pyo3(name = "frequent_itemsets")]
fn frequent_itemsets_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: i64,
) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
    let config = config_from(min_support, 1)?;
    let transactions = from_dense(transactions.as_array());
    let outcome = py.allow_threads(|| mine(&transactions, &config));

    let mut result = Vec::new();
    if !outcome.level1.frequent.is_empty() {
        result.push(level_array(py, outcome.level1.frequent.iter().map(|&item| [item]))?);
    }
    if !outcome.level2.frequent.is_empty() {
        result.push(level_array(py, outcome.level2.frequent.iter().map(|p| *p.items()))?);
    }
    if !outcome.level3.frequent.is_empty() {
        result.push(level_array(py, outcome.level3.frequent.iter().map(|t| *t.items()))?);
    }
    Ok(result)
}

/// Ranked rules as `(lhs, rhs, support, confidence)` tuples: the pair rules
/// first, then the triple rules with a `(a, b)` lhs.
#[pyfunction]
#[pyo3(name = "association_rules")]
fn association_rules_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: i64,
    top_k: i64,
) -> PyResult<(Vec<PairRuleRow>, Vec<TripleRuleRow>)> {
    let config = config_from(min_support, top_k)?;
    let transactions = from_dense(transactions.as_array());
    let outcome = py.allow_threads(|| mine(&transactions, &config));

    let pairs = outcome
        .pair_rules
        .iter()
        .map(|r| (r.lhs, r.rhs, r.support, r.confidence))
        .collect();
    let triples = outcome
        .triple_rules
        .iter()
        .map(|r| {
            let [a, b] = *r.lhs.items();
            ((a, b), r.rhs, r.support, r.confidence)
        })
        .collect();
    Ok((pairs, triples))
}

#[pymodule]
fn apriori_rules(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(frequent_itemsets_py, m)?)?;
    m.add_function(wrap_pyfunction!(association_rules_py, m)?)?;
    Ok(())
}
