// tests/facets.rs
//
// Facet extraction and the region/producer cascade.
//
use veranda_vin::facets::{
    Dimension, FacetOptions, facet_values, producer_candidates, region_candidates, vintage_years,
};
use veranda_vin::filter::FilterSelection;
use veranda_vin::wine::WineRow;

fn wine(country: &str, region: &str, producer: &str, year: Option<i32>, grapes: &[&str], size: Option<&str>) -> WineRow {
    WineRow {
        name: format!("{producer} {region}"),
        country: country.into(),
        region: region.into(),
        producer: producer.into(),
        vintage: year,
        grapes: grapes.iter().map(|g| g.to_string()).collect(),
        size: size.map(String::from),
        wine_type: "Rød".into(),
        price: Some(500.0),
    }
}

fn rows() -> Vec<WineRow> {
    vec![
        wine("France", "Burgundy", "Domaine X", Some(2018), &["Pinot Noir"], None),
        wine("Italy", "Piedmont", "Cantina Y", Some(2015), &["Nebbiolo"], Some("Magnum")),
        wine("France", "Rhône", "Guigal", Some(2020), &["Syrah", "Grenache"], None),
        wine("France", "Burgundy", "Domaine Z", None, &["Chardonnay", "Pinot Noir"], Some("Halv")),
        wine("Italy", "Tuscany", "Antinori", Some(2018), &[], None),
        wine("", "", "", None, &[], None),
    ]
}

#[test]
fn values_are_distinct_sorted_and_skip_missing() {
    let rows = rows();
    assert_eq!(facet_values(&rows, Dimension::Country), vec!["France", "Italy"]);
    assert_eq!(facet_values(&rows, Dimension::Size), vec!["Halv", "Magnum"]);
    assert_eq!(facet_values(&rows, Dimension::Type), vec!["Rød"]);
}

#[test]
fn grapes_are_split_per_row_before_dedup() {
    let rows = rows();
    assert_eq!(
        facet_values(&rows, Dimension::Grape),
        vec!["Chardonnay", "Grenache", "Nebbiolo", "Pinot Noir", "Syrah"]
    );
}

#[test]
fn vintages_sort_newest_first() {
    let rows = rows();
    assert_eq!(vintage_years(&rows), vec![2020, 2018, 2015]);
    assert_eq!(facet_values(&rows, Dimension::Vintage), vec!["2020", "2018", "2015"]);
}

#[test]
fn regions_follow_selected_countries() {
    let rows = rows();
    let all = region_candidates(&rows, &FilterSelection::default());
    assert_eq!(all, vec!["Burgundy", "Piedmont", "Rhône", "Tuscany"]);

    let france = region_candidates(&rows, &FilterSelection::new().with_countries(["France"]));
    assert_eq!(france, vec!["Burgundy", "Rhône"]);
}

#[test]
fn producers_prefer_regions_then_countries() {
    let rows = rows();

    let none = producer_candidates(&rows, &FilterSelection::default());
    assert_eq!(none, vec!["Antinori", "Cantina Y", "Domaine X", "Domaine Z", "Guigal"]);

    let by_country = FilterSelection::new().with_countries(["Italy"]);
    assert_eq!(producer_candidates(&rows, &by_country), vec!["Antinori", "Cantina Y"]);

    // Regions win over countries when both are set
    let by_region = FilterSelection::new().with_countries(["Italy"]).with_regions(["Burgundy"]);
    assert_eq!(producer_candidates(&rows, &by_region), vec!["Domaine X", "Domaine Z"]);
}

#[test]
fn cascade_only_narrows_region_and_producer() {
    let rows = rows();
    let sel = FilterSelection::new().with_countries(["Italy"]);
    let opts = FacetOptions::cascade(&rows, &sel);

    assert_eq!(opts.countries, vec!["France", "Italy"]);
    assert_eq!(opts.regions, vec!["Piedmont", "Tuscany"]);
    assert_eq!(opts.producers, vec!["Antinori", "Cantina Y"]);
    assert_eq!(opts.years, vec![2020, 2018, 2015]);
    assert_eq!(opts.sizes, vec!["Halv", "Magnum"]);
}

#[test]
fn settle_drops_orphaned_region_and_producer_picks() {
    let rows = rows();
    // Burgundy and Domaine X picked, then the user switches country to Italy
    let sel = FilterSelection::new()
        .with_countries(["Italy"])
        .with_regions(["Burgundy"])
        .with_producers(["Domaine X", "Antinori"]);

    let (opts, settled) = FacetOptions::settle(&rows, &sel);
    assert!(settled.regions.is_empty());
    assert_eq!(settled.producers.iter().collect::<Vec<_>>(), vec!["Antinori"]);
    assert_eq!(opts.producers, vec!["Antinori", "Cantina Y"]);
    assert_eq!(settled.countries, sel.countries);
}

#[test]
fn values_by_dimension_match_cascade_lists() {
    let rows = rows();
    let opts = FacetOptions::cascade(&rows, &FilterSelection::default());
    assert_eq!(opts.values(Dimension::Vintage), vec!["2020", "2018", "2015"]);
    assert_eq!(opts.values(Dimension::Grape), opts.grapes);
}
