// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Org chart: build a tree from the mock roster, lay it out, and inspect it.
//!
//! This example shows how to:
//! - resolve the whole organization and a single department as separate trees,
//! - lay both out with the default card geometry and with a depth limit,
//! - read card rectangles and connectors for drawing,
//! - hit test a point, as a click handler would.
//!
//! Run:
//! - `cargo run -p roster_demos --example org_chart`

use kurbo::Point;
use roster_demos::{init_tracing, mock_roster};
use roster_org_chart::{
    EmployeeId, LayoutConfig, MaxDepth, OrgChart, OrgTree, RootSelector, chain_of_command,
};

fn print_chart(title: &str, chart: &OrgChart<'_, roster_org_chart::Employee>) {
    println!(
        "{title}: {} cards, {} x {} px",
        chart.len(),
        chart.width(),
        chart.height()
    );
    for node in chart.nodes() {
        let indent = "  ".repeat(node.level as usize);
        println!(
            "  {indent}{} ({}) at ({}, {})",
            node.employee.name, node.employee.title, node.position.x, node.position.y
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let staff = mock_roster()?;
    let config = LayoutConfig::default();

    let Some(org) = OrgTree::build(&staff, RootSelector::All)? else {
        println!("roster has no root; nothing to draw");
        return Ok(());
    };
    let chart = org.layout(MaxDepth::All, &config);
    print_chart("Whole organization", &chart);

    println!("Connectors:");
    for connector in chart.connectors() {
        let [down, rail, drop] = connector.segments;
        println!(
            "  {:?} -> {:?}: ({}, {}) -> ({}, {}) -> ({}, {}) -> ({}, {})",
            connector.parent,
            connector.child,
            down.p0.x,
            down.p0.y,
            rail.p0.x,
            rail.p0.y,
            rail.p1.x,
            rail.p1.y,
            drop.p1.x,
            drop.p1.y
        );
    }

    let overview = org.layout(MaxDepth::Level(1), &config);
    print_chart("Leadership only", &overview);

    let engineering = OrgTree::build(&staff, RootSelector::Employee(EmployeeId(2)))?;
    if let Some(engineering) = engineering {
        print_chart("Engineering", &engineering.layout(MaxDepth::All, &config));
    }

    let click = Point::new(240.0, 450.0);
    match chart.hit_test(click).and_then(|id| org.employee(id)) {
        Some(employee) => {
            let chain = chain_of_command(&staff, employee.id)?;
            let names: Vec<_> = chain.iter().map(|e| e.name.as_str()).collect();
            println!("Clicked {}: {}", employee.name, names.join(" -> "));
        }
        None => println!("Clicked empty space at {click:?}"),
    }

    Ok(())
}
