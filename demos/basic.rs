use mcc_rule_tree::{group_by_mcc, parse_rules, render_groups, RenderOptions, DEFAULT_HIERARCHY};

fn main() {
    let input = include_str!("rules.jsonl");

    let parsed = parse_rules(input);
    for failure in &parsed.failures {
        eprintln!("skipped {failure}");
    }

    let groups = group_by_mcc(&parsed.records);
    println!("{groups}");
    println!();

    let text = render_groups(&groups, &DEFAULT_HIERARCHY, &RenderOptions::default());
    print!("{text}");
}
