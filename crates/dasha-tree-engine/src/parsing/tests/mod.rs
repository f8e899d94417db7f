//! Document-level tests for the period parser.
//!
//! Each test parses a small table, checks the structural invariants and
//! compares the normalized listing against an inline snapshot.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::convert::convert;
use crate::models::{DashaLevel, WarningKind, warning::has_kind};
use crate::parsing::{ParseOptions, ParsedDoc, parse_document, snapshot};

const FILENAME: &str = "Asha_Devi_1345-JHora.txt";

fn parse(text: &str) -> ParsedDoc {
    let doc = parse_document(FILENAME, text, &ParseOptions::default());
    snapshot::invariants(&doc);
    doc
}

fn listing(doc: &ParsedDoc) -> String {
    snapshot::normalize(doc, &doc.warnings)
}

#[test]
fn md_with_two_ads_has_no_warnings() {
    let doc = parse(
        "MD: Jupiter 01-01-2000 to 31-12-2016
  AD: Saturn 01-01-2000 to 15-03-2002
  AD: Mercury 16-03-2002 to 20-08-2004
",
    );
    snapshot::check_date_order(&doc);

    assert_eq!(doc.tree.periods.len(), 1);
    assert!(doc.warnings.is_empty());
    assert_snapshot!(listing(&doc), @r"
    L001 MD Jupiter 2000-01-01..2016-12-31
    L002   AD Saturn 2000-01-01..2002-03-15
    L003   AD Mercury 2002-03-16..2004-08-20
    ");

    let c = convert(FILENAME, "MD: Jupiter 01-01-2000 to 31-12-2016\n", &ParseOptions::default());
    assert!(c.warnings.is_empty());
}

#[test]
fn new_sibling_closes_open_descendants() {
    let doc = parse(
        "MD: Jupiter 01-01-2000 to 31-12-2016
  AD: Jupiter 01-01-2000 to 18-02-2002
    PD: Jupiter 01-01-2000 to 25-04-2000
  AD: Saturn 18-02-2002 to 01-09-2004
    PD: Saturn 18-02-2002 to 10-07-2002
",
    );
    let md = &doc.tree.periods[0];
    assert_eq!(md.children.len(), 2);
    assert_eq!(md.children[0].children.len(), 1);
    assert_eq!(md.children[1].children[0].ruler_name, "Saturn");
    assert_snapshot!(listing(&doc), @r"
    L001 MD Jupiter 2000-01-01..2016-12-31
    L002   AD Jupiter 2000-01-01..2002-02-18
    L003     PD Jupiter 2000-01-01..2000-04-25
    L004   AD Saturn 2002-02-18..2004-09-01
    L005     PD Saturn 2002-02-18..2002-07-10
    ");
}

#[test]
fn tagged_line_without_dates_keeps_its_node() {
    let doc = parse(
        "MD: Jupiter 01-01-2000 to 31-12-2016
  AD: Saturn from 01-01-2000 until ???
",
    );
    assert!(has_kind(&doc.warnings, WarningKind::UnparsableDate));
    assert_snapshot!(listing(&doc), @r"
    L001 MD Jupiter 2000-01-01..2016-12-31
    L002   AD Saturn no dates
    ! UnparsableDate @2
    ");
}

#[test]
fn ad_before_any_md_is_unattached() {
    let doc = parse(
        "  AD: Saturn 01-01-2000 to 15-03-2002
MD: Jupiter 01-01-2000 to 31-12-2016
",
    );
    assert_eq!(doc.tree.unattached.len(), 1);
    assert_eq!(doc.tree.unattached[0].level, DashaLevel::Antardasha);
    assert_snapshot!(listing(&doc), @r"
    L002 MD Jupiter 2000-01-01..2016-12-31
    -- unattached --
    L001   AD Saturn 2000-01-01..2002-03-15
    ! OrphanPeriod @1
    ");
}

#[test]
fn pyjhora_listing_with_summary_and_sections() {
    let doc = parse(
        "Vimsottari Dasa:
Maha Dasas:
  Jupiter: 2000-01-01 00:00:00 - 2016-01-01 00:00:00
  Saturn: 2016-01-01 00:00:00 - 2035-01-01 00:00:00
Ju MD: 2000-01-01 00:00:00 - 2016-01-01 00:00:00
Antardasas in this MD:
    Ju AD: 2000-01-01 00:00:00 - 2002-02-19 00:00:00
    Pratyantardasas in this AD:
        Ju PD: 2000-01-01 00:00:00 - 2000-04-25 00:00:00
        Sookshma-antardasas in this PD:
            Ju SD: 2000-01-01 00:00:00 - 2000-01-18 00:00:00
            Sa SD: 2000-01-18 00:00:00 - 2000-02-08 00:00:00
        Sa PD: 2000-04-25 00:00:00 - 2000-09-10 00:00:00
    Sa AD: 2002-02-19 00:00:00 - 2004-09-01 00:00:00
Sa MD: 2016-01-01 00:00:00 - 2035-01-01 00:00:00
",
    );
    snapshot::check_date_order(&doc);

    assert_eq!(doc.tree.dasha_system.as_deref(), Some("Vimsottari Dasa"));
    let summary: Vec<&str> = doc.tree.summary.iter().map(|s| s.ruler_name.as_str()).collect();
    assert_eq!(summary, vec!["Jupiter", "Saturn"]);
    assert_snapshot!(listing(&doc), @r"
    L005 MD Jupiter 2000-01-01..2016-01-01
    L007   AD Jupiter 2000-01-01..2002-02-19
    L009     PD Jupiter 2000-01-01..2000-04-25
    L011       SD Jupiter 2000-01-01..2000-01-18
    L012       SD Saturn 2000-01-18..2000-02-08
    L013     PD Saturn 2000-04-25..2000-09-10
    L014   AD Saturn 2002-02-19..2004-09-01
    L015 MD Saturn 2016-01-01..2035-01-01
    ");
}

#[test]
fn prose_becomes_notes_or_noise() {
    let doc = parse(
        "Dasha report for Asha
===========
MD: Jupiter 01-01-2000 to 31-12-2016
Good period for learning.
  AD: Saturn 01-01-2000 to 15-03-2002
  Delays at work
Page 2
  AD: Mercury 16-03-2002 to 20-08-2004
",
    );
    assert_snapshot!(listing(&doc), @r"
    L003 MD Jupiter 2000-01-01..2016-12-31
    L003   # Good period for learning.
    L005   AD Saturn 2000-01-01..2002-03-15
    L005     # Delays at work
    L008   AD Mercury 2002-03-16..2004-08-20
    ");
}

#[test]
fn untagged_table_nests_by_indentation() {
    let doc = parse(
        "Jupiter 01-01-2000 31-12-2016
    Saturn 01-01-2000 15-03-2002
        Mercury 01-01-2000 10-06-2000
    Mercury 16-03-2002 20-08-2004
Saturn 01-01-2017 31-12-2035
",
    );
    assert_snapshot!(listing(&doc), @r"
    L001 MD Jupiter 2000-01-01..2016-12-31
    L002   AD Saturn 2000-01-01..2002-03-15
    L003     PD Mercury 2000-01-01..2000-06-10
    L004   AD Mercury 2002-03-16..2004-08-20
    L005 MD Saturn 2017-01-01..2035-12-31
    ");
}

#[test]
fn oversized_input_is_cut_at_a_line_boundary() {
    let text = "MD: Jupiter 01-01-2000 to 31-12-2016
  AD: Saturn 01-01-2000 to 15-03-2002
  AD: Mercury 16-03-2002 to 20-08-2004
";
    let second_line_end = text.find("  AD: Mercury").unwrap();
    let options = ParseOptions {
        max_input_bytes: second_line_end + 5,
        ..ParseOptions::default()
    };
    let doc = parse_document(FILENAME, text, &options);
    snapshot::invariants(&doc);

    assert_eq!(doc.tree.node_count(), 2);
    assert_eq!(doc.rope.len(), second_line_end);
    let truncated: Vec<_> = doc
        .warnings
        .iter()
        .filter(|w| w.kind == WarningKind::InputTruncated)
        .collect();
    assert_eq!(truncated.len(), 1);
    assert_eq!(truncated[0].line, None);
}

#[test]
fn conversion_is_deterministic() {
    let text = "Vimsottari Dasa:
Ju MD: 2000-01-01 00:00:00 - 2016-01-01 00:00:00
    Sa AD: 2000-01-01 00:00:00 - 2002-07-14 00:00:00
    Me AD: ??? - ???
";
    let options = ParseOptions::default();
    let a = convert(FILENAME, text, &options).into_document().to_json().unwrap();
    let b = convert(FILENAME, text, &options).into_document().to_json().unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_input_gives_empty_tree() {
    let doc = parse("");
    assert!(doc.tree.is_empty());
    assert!(doc.warnings.is_empty());
}
