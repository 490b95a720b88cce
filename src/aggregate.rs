use crate::lookup::Season;
use crate::types::{DerivedRecord, SeasonalTotal};
use std::collections::BTreeMap;

/// Sum paid quantity per (board, season, year). Missing quantities count as
/// zero. Groups with no rows do not appear.
///
/// The map is ordered, so output is sorted by board, then year, then season
/// regardless of input order.
pub fn aggregate(records: &[DerivedRecord]) -> Vec<SeasonalTotal> {
    let mut totals: BTreeMap<(&str, &str, Season), u64> = BTreeMap::new();
    for r in records {
        *totals
            .entry((r.board.as_str(), r.year.as_str(), r.season))
            .or_insert(0) += r.paid_quantity.unwrap_or(0);
    }
    totals
        .into_iter()
        .map(|((board, year, season), total_quantity)| SeasonalTotal {
            board: board.to_string(),
            season,
            year: year.to_string(),
            total_quantity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(board: &str, year: i32, month: u32, season: Season, qty: Option<u64>) -> DerivedRecord {
        DerivedRecord {
            board: board.into(),
            drug_description: "CITALOPRAM".into(),
            date: NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            year: year.to_string(),
            season,
            paid_quantity: qty,
        }
    }

    fn sample() -> Vec<DerivedRecord> {
        vec![
            rec("Lothian", 2019, 1, Season::Winter, Some(10)),
            rec("Lothian", 2019, 2, Season::Winter, Some(5)),
            rec("Lothian", 2019, 12, Season::Winter, None),
            rec("Lanarkshire", 2019, 7, Season::Summer, Some(7)),
            rec("Lothian", 2020, 1, Season::Winter, Some(1)),
            rec("Lothian", 2019, 4, Season::Spring, Some(3)),
        ]
    }

    #[test]
    fn one_row_per_key_with_sums() {
        let out = aggregate(&sample());
        let got: Vec<_> = out
            .iter()
            .map(|r| (r.board.as_str(), r.season, r.year.as_str(), r.total_quantity))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Lanarkshire", Season::Summer, "2019", 7),
                ("Lothian", Season::Winter, "2019", 15),
                ("Lothian", Season::Spring, "2019", 3),
                ("Lothian", Season::Winter, "2020", 1),
            ]
        );
    }

    #[test]
    fn missing_quantity_keeps_the_group() {
        let out = aggregate(&[rec("Lothian", 2019, 12, Season::Winter, None)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].total_quantity, 0);
    }

    #[test]
    fn order_independent_and_repeatable() {
        let records = sample();
        let expected = aggregate(&records);

        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(aggregate(&reversed), expected);

        let mut rotated = records.clone();
        rotated.rotate_left(2);
        assert_eq!(aggregate(&rotated), expected);

        assert_eq!(aggregate(&records), expected);
    }

    #[test]
    fn empty_input_gives_no_rows() {
        assert!(aggregate(&[]).is_empty());
    }
}
