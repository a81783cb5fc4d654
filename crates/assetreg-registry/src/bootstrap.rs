//! Bootstrap records written by `AssetRegistry::init_ledger`.

/// One bootstrap record: `(asset_id, owner, type_file, base64_file)`.
pub type AssetSeed = (&'static str, &'static str, &'static str, &'static str);

/// Created in this order; every record is a CSV placeholder with no payload.
pub const BOOTSTRAP_ASSETS: [AssetSeed; 6] = [
    ("asset1", "Tomoko", "csv", ""),
    ("asset2", "Brad", "csv", ""),
    ("asset3", "Jin Soo", "csv", ""),
    ("asset4", "Max", "csv", ""),
    ("asset5", "Adrian", "csv", ""),
    ("asset6", "Michel", "csv", ""),
];
