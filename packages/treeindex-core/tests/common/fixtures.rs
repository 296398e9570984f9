//! Test fixtures
//!
//! `tests/fixtures/ruby` holds two small Ruby files with parser dumps
//! (`*.rb.ast.json`) next to them:
//!
//! - `dog.rb`: `class Dog` with `bark` (lines 2-4) and `wag_tail` (6-8)
//! - `cat.rb`: `class Cat` with `scratch` (2-5) calling `Dog.new` and
//!   `dog.wag_tail`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use treeindex_core::features::parsing::SidecarTreeSource;
use treeindex_core::{BuildReport, IndexBuilder, IndexConfig, IndexStore, InMemoryIndexStore, QueryEngine};

pub const DOG_RB: &str = "dog.rb";
pub const CAT_RB: &str = "cat.rb";

/// Line of `dog = Dog.new` inside `Cat#scratch`
pub const SCRATCH_LINE: u32 = 3;

/// Line of `puts "Wagging tail"` inside `Dog#wag_tail`
pub const WAG_TAIL_LINE: u32 = 7;

pub fn ruby_fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ruby")
}

/// Sequential builder reading sidecar dumps
pub fn fixture_builder() -> IndexBuilder {
    let config = IndexConfig {
        parallel: false,
        ..IndexConfig::default()
    };
    IndexBuilder::with_source(config, Arc::new(SidecarTreeSource::default()))
}

/// Build the fixture repository into `store`
pub fn build_fixture_index(store: &dyn IndexStore) -> BuildReport {
    fixture_builder()
        .build(&ruby_fixture_dir(), store)
        .expect("fixture build failed")
}

/// Query engine over an in-memory index of the fixture repository
pub fn fixture_engine() -> QueryEngine {
    let store = InMemoryIndexStore::new();
    build_fixture_index(&store);
    QueryEngine::from_config(Arc::new(store), &IndexConfig::default())
}

/// Copy of the fixture repository in a temp dir, for tests that add files
pub fn copy_fixture_repo() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    for entry in std::fs::read_dir(ruby_fixture_dir()).expect("fixture dir") {
        let entry = entry.expect("fixture entry");
        std::fs::copy(entry.path(), dir.path().join(entry.file_name())).expect("copy fixture");
    }
    dir
}
