//! Console rendering of evaluations.

use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::linear::Matrix;
use crate::model::Evaluation;
use crate::scoregrid::OverUnder;

pub fn tabulate_prices(evaluation: &Evaluation) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Outcome".into(),
                "Model".into(),
                "Market".into(),
                "Blended".into(),
                "Fair".into(),
                "Live".into(),
            ],
        ));
    for outcome in OverUnder::iter() {
        let index = outcome.index();
        table.push_row(Row::new(
            Styles::default(),
            vec![
                outcome.to_string().into(),
                format!("{:.4}", evaluation.model_probs[index]).into(),
                format!("{:.4}", evaluation.market.probs[index]).into(),
                format!("{:.4}", evaluation.blended_probs[index]).into(),
                format!("{:.2}", evaluation.fair.prices[index]).into(),
                format!("{:.2}", evaluation.market.prices[index]).into(),
            ],
        ));
    }
    table
}

pub fn tabulate_scoregrid(scoregrid: &Matrix) -> Table {
    let mut cols = vec![Col::new(
        Styles::default().with(MinWidth(4)).with(HAlign::Right),
    )];
    for _ in 0..scoregrid.cols() {
        cols.push(Col::new(
            Styles::default().with(MinWidth(7)).with(HAlign::Right),
        ));
    }
    let mut header = vec!["H/A".into()];
    for away_goals in 0..scoregrid.cols() {
        header.push(format!("{away_goals}").into());
    }
    let mut table = Table::default()
        .with_cols(cols)
        .with_row(Row::new(Styles::default().with(Header(true)), header));
    for home_goals in 0..scoregrid.rows() {
        let mut cells = vec![format!("{home_goals}").into()];
        for &prob in scoregrid.row_slice(home_goals) {
            cells.push(format!("{prob:.4}").into());
        }
        table.push_row(Row::new(Styles::default(), cells));
    }
    table
}

/// The two-line result: fair against live per outcome.
pub fn summary(evaluation: &Evaluation) -> String {
    let under = OverUnder::Under.index();
    let over = OverUnder::Over.index();
    format!(
        "Under 2.5 Goals: Fair {:.2} vs Live {:.2}\nOver 2.5 Goals:  Fair {:.2}  vs Live {:.2}",
        evaluation.fair.prices[under],
        evaluation.market.prices[under],
        evaluation.fair.prices[over],
        evaluation.market.prices[over],
    )
}
