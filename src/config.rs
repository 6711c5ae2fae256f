use crate::error::{IconError, Result};
use crate::models::{Destination, OutputFormat, RenderSpec};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Plan file picked up from the working directory when present.
pub const PLAN_FILE: &str = "icon-plan.json";

const ICON_LADDER: [u32; 10] = [16, 32, 72, 96, 128, 144, 152, 192, 384, 512];
const PWA_SIZES: [u32; 2] = [192, 512];
const FAVICON_SIZE: u32 = 32;
const MIN_ICON_SIZE: u32 = 16;
const MAX_ICON_SIZE: u32 = 4096;
const MAX_ICO_SIZE: u32 = 256;

/// One icon to produce: a size and the file it is saved under.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub size: u32,
    pub file: String,
    pub dest: Destination,
}

impl PlanEntry {
    pub fn new(size: u32, file: impl Into<String>, dest: Destination) -> Self {
        Self {
            size,
            file: file.into(),
            dest,
        }
    }
}

/// Ordered list of icons to generate and the two directories they go to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IconPlan {
    pub icons_dir: PathBuf,
    pub public_dir: PathBuf,
    pub entries: Vec<PlanEntry>,
}

impl Default for IconPlan {
    fn default() -> Self {
        let mut entries: Vec<PlanEntry> = ICON_LADDER
            .iter()
            .map(|&s| PlanEntry::new(s, format!("icon-{s}x{s}.png"), Destination::Icons))
            .collect();
        entries.extend(
            PWA_SIZES
                .iter()
                .map(|&s| PlanEntry::new(s, format!("pwa-{s}x{s}.png"), Destination::Public)),
        );
        entries.push(PlanEntry::new(FAVICON_SIZE, "favicon.ico", Destination::Public));

        Self {
            icons_dir: PathBuf::from("client/public/icons"),
            public_dir: PathBuf::from("client/public"),
            entries,
        }
    }
}

impl IconPlan {
    /// Loads a plan from a JSON file, or returns the default plan if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(path)?;
        let plan: IconPlan = serde_json::from_reader(BufReader::new(file))?;
        plan.validate()?;
        Ok(plan)
    }

    /// Moves both output directories under `root`.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.icons_dir = root.join(&self.icons_dir);
        self.public_dir = root.join(&self.public_dir);
        self
    }

    /// Rejects sizes outside 16..=4096, and ICO entries larger than the
    /// format's 256px limit.
    pub fn validate(&self) -> Result<()> {
        let invalid = |e: &&PlanEntry| {
            !(MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(&e.size)
                || (OutputFormat::from_path(Path::new(&e.file)) == OutputFormat::Ico
                    && e.size > MAX_ICO_SIZE)
        };
        match self.entries.iter().find(invalid) {
            Some(entry) => Err(IconError::InvalidSize {
                size: entry.size,
                file: entry.file.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn dir_for(&self, dest: Destination) -> &Path {
        match dest {
            Destination::Icons => &self.icons_dir,
            Destination::Public => &self.public_dir,
        }
    }

    /// Resolves every entry to a concrete render target, in plan order.
    pub fn targets(&self) -> Vec<RenderSpec> {
        self.entries
            .iter()
            .map(|e| RenderSpec::new(e.size, self.dir_for(e.dest).join(&e.file)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_plan_matches_ladder() {
        let plan = IconPlan::default();
        let icons: Vec<_> = plan
            .entries
            .iter()
            .filter(|e| e.dest == Destination::Icons)
            .map(|e| e.size)
            .collect();
        assert_eq!(icons, ICON_LADDER.to_vec());

        let public: Vec<_> = plan
            .entries
            .iter()
            .filter(|e| e.dest == Destination::Public)
            .map(|e| (e.size, e.file.as_str()))
            .collect();
        assert_eq!(
            public,
            vec![(192, "pwa-192x192.png"), (512, "pwa-512x512.png"), (32, "favicon.ico")]
        );
    }

    #[test]
    fn targets_resolve_paths_and_formats() {
        let plan = IconPlan::default();
        let targets = plan.targets();
        assert_eq!(targets.len(), 13);
        assert_eq!(targets[0].path, PathBuf::from("client/public/icons/icon-16x16.png"));
        assert_eq!(targets[0].format, OutputFormat::Png);

        let favicon = targets.last().unwrap();
        assert_eq!(favicon.path, PathBuf::from("client/public/favicon.ico"));
        assert_eq!(favicon.size, 32);
        assert_eq!(favicon.format, OutputFormat::Ico);
    }

    #[test]
    fn missing_plan_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let plan = IconPlan::load_or_default(&dir.path().join(PLAN_FILE)).unwrap();
        assert_eq!(plan, IconPlan::default());
    }

    #[test]
    fn plan_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PLAN_FILE);
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "icons_dir": "out/icons",
                "public_dir": "out",
                "entries": [
                    {{ "size": 64, "file": "icon-64x64.png", "dest": "icons" }},
                    {{ "size": 48, "file": "favicon.ico", "dest": "public" }}
                ]
            }}"#
        )
        .unwrap();

        let plan = IconPlan::load_or_default(&path).unwrap();
        let targets = plan.targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].path, PathBuf::from("out/icons/icon-64x64.png"));
        assert_eq!(targets[1].format, OutputFormat::Ico);
    }

    #[test]
    fn zero_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PLAN_FILE);
        std::fs::write(
            &path,
            r#"{"icons_dir":"a","public_dir":"b","entries":[{"size":0,"file":"x.png","dest":"icons"}]}"#,
        )
        .unwrap();

        let err = IconPlan::load_or_default(&path).unwrap_err();
        assert!(matches!(err, IconError::InvalidSize { size: 0, .. }));
    }

    #[test]
    fn sizes_outside_supported_range_are_rejected() {
        for size in [1, 15, 4097, u32::MAX] {
            let mut plan = IconPlan::default();
            plan.entries.push(PlanEntry::new(size, "odd.png", Destination::Icons));
            match plan.validate() {
                Err(IconError::InvalidSize { size: s, .. }) => assert_eq!(s, size),
                other => panic!("size {size} accepted: {other:?}"),
            }
        }

        let mut plan = IconPlan::default();
        plan.entries.push(PlanEntry::new(16, "tiny.png", Destination::Icons));
        plan.entries.push(PlanEntry::new(4096, "huge.png", Destination::Icons));
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn oversized_favicon_is_rejected() {
        let mut plan = IconPlan::default();
        plan.entries.push(PlanEntry::new(512, "favicon-512.ico", Destination::Public));
        assert!(matches!(
            plan.validate(),
            Err(IconError::InvalidSize { size: 512, .. })
        ));
    }

    #[test]
    fn malformed_plan_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PLAN_FILE);
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            IconPlan::load_or_default(&path),
            Err(IconError::Plan(_))
        ));
    }

    #[test]
    fn rooted_plan_moves_both_dirs() {
        let plan = IconPlan::default().rooted_at(Path::new("/tmp/site"));
        assert_eq!(plan.icons_dir, PathBuf::from("/tmp/site/client/public/icons"));
        assert_eq!(plan.public_dir, PathBuf::from("/tmp/site/client/public"));
    }
}
