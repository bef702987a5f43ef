use anyhow::{anyhow, Result};
use ndarray::Array2;
use ndarray_rand::{rand_distr::Normal, RandomExt};
use wmw::{IndexSets, ValueType, WmwTest};

fn main() -> Result<()> {
    env_logger::init();

    let (n_genes, n_samples) = (200, 6);
    let genes = (0..n_genes)
        .map(|x| format!("gene.{}", x))
        .collect::<Vec<String>>();
    let normal = Normal::new(0., 1.).map_err(|e| anyhow!("{:?}", e))?;
    let mut matrix = Array2::random((n_genes, n_samples), normal);

    // shift the first twenty genes up in the first half of the samples
    matrix
        .slice_mut(ndarray::s![..20, ..n_samples / 2])
        .mapv_inplace(|x| x + 1.5);

    let sets = vec![
        (
            "shifted".to_string(),
            (0..20).map(|x| format!("gene.{}", x)).collect(),
        ),
        (
            "background".to_string(),
            (100..140).map(|x| format!("gene.{}", x)).collect(),
        ),
        (
            "partial".to_string(),
            vec!["gene.3".to_string(), "gene.150".to_string(), "missing".to_string()],
        ),
    ];
    let index_sets = IndexSets::from_names(&genes, &sets);

    for value_type in ValueType::ALL {
        let grid = WmwTest::new(index_sets.indices(), matrix.view(), value_type).fit()?;
        println!("{}", value_type);
        for (name, row) in index_sets.names().iter().zip(grid.rows()) {
            println!("  {:<12}{:.4}", name, row);
        }
    }
    Ok(())
}
