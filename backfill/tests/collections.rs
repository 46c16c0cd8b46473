//! Behavioural tests for sequence and map literals.

use std::collections::{BTreeMap, HashMap};

use anyhow::{Result, ensure};
use backfill::{Fill, fill_defaults};
use rstest::rstest;

#[derive(Debug, Default, Fill)]
struct Lists {
    #[fill(default = "[1,2,3,4]")]
    numbers: Vec<i32>,
    #[fill(default = "[]")]
    explicit_empty: Option<Vec<i32>>,
    missing: Option<Vec<i32>>,
    #[fill(default = "[[a, b], [c]]")]
    nested: Vec<Vec<String>>,
    #[fill(default = "[1,,2,]")]
    gaps: Vec<String>,
    #[fill(default = "[1,2")]
    unbalanced: Vec<i32>,
    #[fill(default = "1,2")]
    unbracketed: Vec<i32>,
}

#[rstest]
fn sequences_are_built_from_literals() -> Result<()> {
    let mut lists = Lists::default();
    fill_defaults(&mut lists);
    ensure!(lists.numbers == [1, 2, 3, 4], "numbers: {:?}", lists.numbers);
    ensure!(
        lists.explicit_empty == Some(Vec::new()),
        "explicit empty: {:?}",
        lists.explicit_empty
    );
    ensure!(lists.missing.is_none(), "missing: {:?}", lists.missing);
    ensure!(
        lists.nested == [vec!["a", "b"], vec!["c"]],
        "nested: {:?}",
        lists.nested
    );
    ensure!(lists.gaps == ["1", "", "2"], "gaps: {:?}", lists.gaps);
    ensure!(lists.unbalanced.is_empty(), "unbalanced: {:?}", lists.unbalanced);
    ensure!(lists.unbracketed.is_empty(), "unbracketed: {:?}", lists.unbracketed);
    Ok(())
}

#[rstest]
fn populated_sequences_are_kept() -> Result<()> {
    let mut lists = Lists {
        numbers: vec![9],
        ..Lists::default()
    };
    fill_defaults(&mut lists);
    ensure!(lists.numbers == [9], "numbers: {:?}", lists.numbers);
    Ok(())
}

#[derive(Debug, Default, Fill)]
struct Maps {
    #[fill(default = "{1:a,2:b}")]
    names: HashMap<i32, String>,
    #[fill(default = "{1:a,1:b}")]
    duplicated: BTreeMap<i32, String>,
    #[fill(default = "{alpha:[1,2],beta:[]}")]
    lists: BTreeMap<String, Vec<u8>>,
    #[fill(default = "{a:{x:1},b:{}}")]
    nested: BTreeMap<String, BTreeMap<String, u16>>,
    #[fill(default = "{orphan,kept:1}")]
    colonless: BTreeMap<String, u8>,
    #[fill(default = "{}")]
    explicit_empty: Option<HashMap<String, String>>,
}

#[rstest]
fn maps_are_built_from_literals() -> Result<()> {
    let mut maps = Maps::default();
    fill_defaults(&mut maps);
    ensure!(
        maps.names == HashMap::from([(1, "a".to_owned()), (2, "b".to_owned())]),
        "names: {:?}",
        maps.names
    );
    ensure!(
        maps.duplicated == BTreeMap::from([(1, "b".to_owned())]),
        "duplicated: {:?}",
        maps.duplicated
    );
    ensure!(
        maps.lists.get("alpha").map(Vec::as_slice) == Some(&b"[1,2]"[..]),
        "byte lists keep their literal text: {:?}",
        maps.lists
    );
    ensure!(
        maps.nested.get("a").and_then(|inner| inner.get("x")) == Some(&1),
        "nested: {:?}",
        maps.nested
    );
    ensure!(
        maps.nested.get("b").is_some_and(BTreeMap::is_empty),
        "nested empty: {:?}",
        maps.nested
    );
    ensure!(
        maps.colonless == BTreeMap::from([("kept".to_owned(), 1)]),
        "colonless: {:?}",
        maps.colonless
    );
    ensure!(
        maps.explicit_empty == Some(HashMap::new()),
        "explicit empty: {:?}",
        maps.explicit_empty
    );
    Ok(())
}

#[derive(Debug, Default, Clone, PartialEq, Fill)]
struct Endpoint {
    #[fill(default = "localhost")]
    host: String,
    #[fill(default = "80")]
    port: u16,
}

#[derive(Debug, Default, Fill)]
struct Cluster {
    nodes: Vec<Endpoint>,
    #[fill(default = "dive")]
    pinned: Vec<Endpoint>,
    #[fill(default = "dive")]
    by_zone: BTreeMap<String, Endpoint>,
    #[fill(default = "[{host:a}]")]
    never_grown: Vec<Endpoint>,
}

#[rstest]
fn struct_elements_are_filled_in_place_under_dive() -> Result<()> {
    let partial = Endpoint {
        host: "db".to_owned(),
        port: 0,
    };
    let mut cluster = Cluster {
        nodes: vec![Endpoint::default(), partial.clone()],
        pinned: vec![partial.clone()],
        by_zone: BTreeMap::from([("east".to_owned(), partial.clone())]),
        never_grown: Vec::new(),
    };
    fill_defaults(&mut cluster);

    let dived = Endpoint {
        host: "db".to_owned(),
        port: 80,
    };
    ensure!(
        cluster.nodes == [Endpoint::default(), partial],
        "populated untagged sequences are not entered: {:?}",
        cluster.nodes
    );
    ensure!(cluster.pinned == [dived.clone()], "pinned: {:?}", cluster.pinned);
    ensure!(
        cluster.by_zone.get("east") == Some(&dived),
        "by_zone: {:?}",
        cluster.by_zone
    );
    ensure!(cluster.never_grown.is_empty(), "never grown: {:?}", cluster.never_grown);
    Ok(())
}

#[derive(Debug, Default, Fill)]
struct Blobs {
    #[fill(default = "[ab,cd]")]
    chunks: Vec<Vec<u8>>,
    untagged: Option<Vec<u8>>,
}

#[rstest]
fn byte_sequences_dispatch_through_the_bytes_shape() -> Result<()> {
    let mut blobs = Blobs::default();
    fill_defaults(&mut blobs);
    ensure!(
        blobs.chunks == [b"ab".to_vec(), b"cd".to_vec()],
        "chunks: {:?}",
        blobs.chunks
    );
    ensure!(blobs.untagged.is_none(), "untagged: {:?}", blobs.untagged);
    Ok(())
}
