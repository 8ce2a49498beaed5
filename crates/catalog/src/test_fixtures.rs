//! Catalogue documents shared by the unit tests

use crate::{Catalog, CatalogLoader};

/// The six reference systems: every legal nesting of binaries, stars and planets
pub(crate) const REFERENCE_SYSTEMS: [&str; 6] = [
    "<system><name>System 1</name><star><name>Star 1</name></star></system>",
    "<system><name>System 2</name><star><name>Star 2</name>\
     <planet><name>Planet 2 b</name></planet></star></system>",
    "<system><name>System 3</name><star><name>Star 3</name>\
     <planet><name>Planet 3 b</name></planet>\
     <planet><name>Planet 3 c</name></planet></star></system>",
    "<system><name>System 4</name>\
     <binary><name>Binary 4AB</name><star><name>Star 4A</name>\
     <planet><name>Planet 4A b</name></planet></star>\
     <star><name>Star 4B</name></star></binary></system>",
    "<system><name>System 5</name>\
     <binary><name>Binary 5AB</name>\
     <binary><name>Binary 5B-AB</name><star><name>Star 5B-A</name><magV>9.5</magV>\
     <planet><name>Planet 5B-A b</name></planet></star><star><name>Star 5B-B</name></star>\
     </binary><star><name>Star 5A</name></star></binary></system>",
    "<system><name>System 6</name>\
     <binary><name>Binary 6AB</name><star><name>Star 6A</name></star>\
     <star><name>Star 6B</name></star>\
     <planet><name>Planet 6AB b</name></planet></binary></system>",
];

/// HD 209458 with its transiting hot Jupiter
pub(crate) const HD_209458: &str = r#"
<system>
    <name>HD 209458</name>
    <rightascension>22 03 10.77</rightascension>
    <declination>+18 53 03.5</declination>
    <distance>47.0</distance>
    <star>
        <name>HD 209458</name>
        <name>V376 Peg</name>
        <mass errorminus="0.033" errorplus="0.033">1.148</mass>
        <radius>1.203</radius>
        <temperature>6065</temperature>
        <age>4.0</age>
        <metallicity>0.02</metallicity>
        <spectraltype>G0V</spectraltype>
        <magV>7.65</magV>
        <magB>8.18</magB>
        <planet>
            <name>HD 209458 b</name>
            <name>Osiris</name>
            <mass>0.714</mass>
            <radius>1.38</radius>
            <period>3.52474859</period>
            <semimajoraxis>0.04707</semimajoraxis>
            <eccentricity>0.0</eccentricity>
            <inclination>86.71</inclination>
            <discoverymethod>RV</discoverymethod>
            <discoveryyear>1999</discoveryyear>
            <istransiting>1</istransiting>
            <lastupdate>15/09/20</lastupdate>
            <description>The first exoplanet seen in transit.</description>
        </planet>
    </star>
</system>
"#;

pub(crate) fn catalog_from(documents: &[&str]) -> Catalog {
    let loader = CatalogLoader::default();
    let mut catalog = Catalog::new();
    for document in documents {
        loader
            .add_str(&mut catalog, document)
            .expect("fixture documents are well formed");
    }
    catalog
}

pub(crate) fn reference_catalog() -> Catalog {
    catalog_from(&REFERENCE_SYSTEMS)
}
