use super::cut::Cut;
use super::edge::Edge;
use super::graph::Graph;
use super::summary::Summary;
use clap::Parser;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Count cycles, nodes, edges and components before and after cutting wires",
    long_about = None
)]
pub struct Snowverload {
    /// Wire to cut, as `a/b`. Repeat for several. Defaults to hfx/pzl bvb/cmg nvd/jqt.
    #[arg(long = "cut", value_name = "A/B")]
    cuts: Vec<Edge>,
    /// Print both summaries as JSON instead of the adjacency dump and text.
    #[arg(long)]
    json: bool,
    /// Log more (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct Report {
    cut: Cut,
    before: Summary,
    after: Summary,
    product: Option<usize>,
}

impl Snowverload {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn cut(&self) -> Cut {
        if self.cuts.is_empty() {
            Cut::default()
        } else {
            Cut::from(self.cuts.clone())
        }
    }

    /// Build the graph from input lines, cut it, and render both snapshots.
    pub fn solve(&self, lines: &[String]) -> anyhow::Result<String> {
        let mut graph = Graph::from_lines(lines);
        let dump = graph.to_string();
        let cut = self.cut();
        let before = Summary::from(&graph);
        log::info!("built graph with {} nodes", before.nodes());
        cut.apply(&mut graph);
        let after = Summary::from(&graph);
        log::info!("cut {} leaves {:?}", cut, after.sizes());
        let product = after.product();
        if self.json {
            let report = Report {
                cut,
                before,
                after,
                product,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
        } else {
            let mut text = format!("{}\nBEFORE DELETION\n{}AFTER DELETION\n{}", dump, before, after);
            if let Some(product) = product {
                text.push_str(&format!("Product of the two group sizes : {}\n", product));
            }
            Ok(text)
        }
    }
}
