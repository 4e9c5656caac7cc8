//! The export orchestrator.
//!
//! A run extracts metadata for every registered class, then renders and
//! writes one file per class:
//!
//! ```text
//! <output>/<file>                      standard DTOs
//! <output>/<package>/Input/<file>      input DTOs
//! <output>/<package>/Output/<file>     output DTOs
//! ```
//!
//! The run stops at the first error. Files written before it stay on disk.

use std::path::{Path, PathBuf};

use dtox_core::{DiskFs, Filesystem, MemoryFs};
use dtox_ir::{ClassHandle, DtoClass, Namespaces};
use indexmap::IndexSet;

use crate::{
    Error, Extractor, Result,
    mapping::find_basename_collisions,
    render::{ExportOptions, RenderContext},
    report::{NoopReporter, Reporter},
    target::ExportTarget,
};

/// Message of the first step of every run.
pub const METADATA_STEP: &str = "Generating classmap metadata";

/// Result of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Written files, in write order.
    pub files: Vec<PathBuf>,
    pub bytes_written: usize,
}

/// A file produced by a preview run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Runs exports against a filesystem, reporting progress as it goes.
pub struct Exporter<'a> {
    extractor: Extractor,
    fs: Box<dyn Filesystem + 'a>,
    reporter: Box<dyn Reporter + 'a>,
}

impl<'a> Exporter<'a> {
    /// An exporter writing to disk without progress output.
    pub fn new(namespaces: Namespaces) -> Self {
        Self {
            extractor: Extractor::new(namespaces),
            fs: Box::new(DiskFs),
            reporter: Box::new(NoopReporter),
        }
    }

    pub fn with_filesystem(mut self, fs: impl Filesystem + 'a) -> Self {
        self.fs = Box::new(fs);
        self
    }

    pub fn with_reporter(mut self, reporter: impl Reporter + 'a) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    pub fn namespaces(&self) -> &Namespaces {
        self.extractor.namespaces()
    }

    /// Export every class into `output_root`, which must exist.
    pub fn run<'h, I, H>(
        &mut self,
        handles: I,
        target: &ExportTarget,
        output_root: &Path,
        options: &ExportOptions,
    ) -> Result<ExportSummary>
    where
        I: IntoIterator<Item = &'h H>,
        H: ClassHandle + ?Sized + 'h,
    {
        let handles: Vec<&H> = handles.into_iter().collect();
        export_into(
            &self.extractor,
            &*self.fs,
            &mut *self.reporter,
            &handles,
            target,
            output_root,
            options,
        )
    }

    /// Run the export in memory and return the files it would write.
    pub fn preview<'h, I, H>(
        &mut self,
        handles: I,
        target: &ExportTarget,
        output_root: &Path,
        options: &ExportOptions,
    ) -> Result<Vec<PreviewFile>>
    where
        I: IntoIterator<Item = &'h H>,
        H: ClassHandle + ?Sized + 'h,
    {
        let handles: Vec<&H> = handles.into_iter().collect();
        let fs = MemoryFs::with_root(output_root);
        export_into(
            &self.extractor,
            &fs,
            &mut *self.reporter,
            &handles,
            target,
            output_root,
            options,
        )?;

        Ok(fs
            .into_files()
            .into_iter()
            .map(|(path, content)| PreviewFile { path, content })
            .collect())
    }
}

fn export_into<H: ClassHandle + ?Sized>(
    extractor: &Extractor,
    fs: &dyn Filesystem,
    reporter: &mut dyn Reporter,
    handles: &[&H],
    target: &ExportTarget,
    output_root: &Path,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let unique: IndexSet<&str> = handles.iter().map(|h| h.class_path()).collect();
    let total = unique.len() + 1;
    tracing::info!(
        export_type = target.name,
        classes = unique.len(),
        output = %output_root.display(),
        "starting export"
    );

    reporter.step(1, total, METADATA_STEP);
    let classes = extractor.extract(handles.iter().copied())?;
    check_basenames(&classes, options)?;

    let namespaces = extractor.namespaces();
    let types = target.type_mapper(namespaces);
    let paths = target.path_mapper(namespaces);

    let mut summary = ExportSummary::default();
    for (index, class) in classes.iter().enumerate() {
        let subdirectory = class.subdirectory();
        let dir = match &subdirectory {
            Some(sub) => output_root.join(sub),
            None => output_root.to_path_buf(),
        };
        if !fs.exists(&dir) {
            fs.mkdir(&dir).map_err(|source| Error::FileWrite {
                path: dir.clone(),
                source,
            })?;
        }

        let file_name = target.file_name(&class.object_name);
        let relative = match &subdirectory {
            Some(sub) => format!("{}/{}", sub, file_name),
            None => file_name.clone(),
        };
        reporter.step(index + 2, total, &format!("Generating {}", relative));

        let module = paths.map_path(&class.class_path);
        if format!("{}.{}", module, target.extension) != relative {
            tracing::warn!(
                class = %class.class_path,
                written = %relative,
                imported_as = %module,
                "class path does not match its output location, imports of it may not resolve"
            );
        }

        let ctx = RenderContext::new(class, options, types, paths);
        let content = target
            .templates
            .render(class.category, &ctx)
            .map_err(|source| Error::Render {
                class: class.class_path.clone(),
                source,
            })?;

        let path = dir.join(&file_name);
        let written = fs
            .write_file(&path, &content)
            .map_err(|source| Error::FileWrite {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), bytes = written, "wrote file");
        summary.bytes_written += written;
        summary.files.push(path);
    }

    tracing::info!(
        files = summary.files.len(),
        bytes = summary.bytes_written,
        "export finished"
    );
    Ok(summary)
}

fn check_basenames(classes: &[DtoClass], options: &ExportOptions) -> Result<()> {
    for collision in find_basename_collisions(classes) {
        if options.strict_basenames {
            return Err(Error::BasenameCollision {
                basename: collision.basename,
                first: collision.first,
                second: collision.second,
            });
        }
        tracing::warn!(
            basename = %collision.basename,
            first = %collision.first,
            second = %collision.second,
            "classes share a basename"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use dtox_ir::{Category, ClassDecl, FieldDecl};

    use super::*;
    use crate::{
        render::{RenderError, TemplateSet},
        testing::{RecordingReporter, sample_registry, test_target},
    };

    fn out() -> PathBuf {
        PathBuf::from("/out")
    }

    #[test]
    fn test_writes_one_file_per_class() {
        let fs = MemoryFs::with_root(out());
        let registry = sample_registry();
        let target = test_target();

        let summary = Exporter::new(Namespaces::default())
            .with_filesystem(&fs)
            .run(&registry, &target, &out(), &ExportOptions::new())
            .unwrap();

        let written: Vec<_> = fs.files().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            written,
            vec![
                PathBuf::from("/out/user.ts"),
                PathBuf::from("/out/Billing/Input/createInvoiceInput.ts"),
                PathBuf::from("/out/Billing/Output/invoiceOutput.ts"),
            ]
        );
        assert_eq!(summary.files, written);
        assert_eq!(
            summary.bytes_written,
            fs.files().iter().map(|(_, c)| c.len()).sum::<usize>()
        );
        assert_eq!(
            fs.read("/out/user.ts").as_deref(),
            Some("standard App.DTO.User\n")
        );
    }

    #[test]
    fn test_reports_every_step() {
        let fs = MemoryFs::with_root(out());
        let mut reporter = RecordingReporter::default();
        let registry = sample_registry();

        Exporter::new(Namespaces::default())
            .with_filesystem(&fs)
            .with_reporter(&mut reporter)
            .run(&registry, &test_target(), &out(), &ExportOptions::new())
            .unwrap();

        assert_eq!(
            reporter.steps,
            vec![
                (1, 4, METADATA_STEP.to_string()),
                (2, 4, "Generating user.ts".to_string()),
                (3, 4, "Generating Billing/Input/createInvoiceInput.ts".to_string()),
                (4, 4, "Generating Billing/Output/invoiceOutput.ts".to_string()),
            ]
        );
    }

    #[test]
    fn test_reported_files_match_written_files() {
        let fs = MemoryFs::with_root(out());
        let mut reporter = RecordingReporter::default();
        let registry = sample_registry();

        let summary = Exporter::new(Namespaces::default())
            .with_filesystem(&fs)
            .with_reporter(&mut reporter)
            .run(&registry, &test_target(), &out(), &ExportOptions::new())
            .unwrap();

        let reported: Vec<_> = reporter.steps[1..]
            .iter()
            .map(|(_, _, msg)| out().join(msg.trim_start_matches("Generating ")))
            .collect();
        assert_eq!(reported, summary.files);
    }

    #[test]
    fn test_extraction_error_writes_nothing() {
        let fs = MemoryFs::with_root(out());
        let registry = vec![
            ClassDecl::new("App.DTO.User").field(FieldDecl::new("name", "string")),
            ClassDecl::new("App.DTO.Broken").field(FieldDecl::union("id", ["int", "string"])),
        ];

        let err = Exporter::new(Namespaces::default())
            .with_filesystem(&fs)
            .run(&registry, &test_target(), &out(), &ExportOptions::new())
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedFieldType { .. }));
        assert!(fs.files().is_empty());
    }

    #[test]
    fn test_render_error_stops_the_run() {
        fn name(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
            Ok(ctx.class.object_name.clone())
        }

        fn fail(ctx: &RenderContext<'_>) -> std::result::Result<String, RenderError> {
            Err(ctx.execution_error("boom"))
        }

        let fs = MemoryFs::with_root(out());
        let mut target = test_target();
        target.templates = TemplateSet::new("test", "ts")
            .with(Category::Standard, name)
            .with(Category::Input, fail);

        let err = Exporter::new(Namespaces::default())
            .with_filesystem(&fs)
            .run(&sample_registry(), &target, &out(), &ExportOptions::new())
            .unwrap_err();

        match err {
            Error::Render { class, source } => {
                assert_eq!(class, "App.DTO.Billing.Input.CreateInvoiceInput");
                assert!(matches!(source, RenderError::Execution { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fs.files().len(), 1);
    }

    #[test]
    fn test_missing_template_for_category() {
        let fs = MemoryFs::with_root(out());
        let mut target = test_target();
        target.templates = TemplateSet::new("test", "ts");

        let err = Exporter::new(Namespaces::default())
            .with_filesystem(&fs)
            .run(&sample_registry(), &target, &out(), &ExportOptions::new())
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Render {
                source: RenderError::TemplateNotFound(_),
                ..
            }
        ));
    }

    #[test]
    fn test_basename_collisions() {
        let registry = vec![
            ClassDecl::new("App.DTO.Billing.Address"),
            ClassDecl::new("App.DTO.Shipping.Address"),
        ];

        let fs = MemoryFs::with_root(out());
        let lenient = Exporter::new(Namespaces::default())
            .with_filesystem(&fs)
            .run(&registry, &test_target(), &out(), &ExportOptions::new());
        assert!(lenient.is_ok());

        let fs = MemoryFs::with_root(out());
        let strict = Exporter::new(Namespaces::default())
            .with_filesystem(&fs)
            .run(
                &registry,
                &test_target(),
                &out(),
                &ExportOptions::new().strict_basenames(true),
            )
            .unwrap_err();
        assert!(matches!(strict, Error::BasenameCollision { .. }));
        assert!(fs.files().is_empty());
    }

    #[test]
    fn test_preview_does_not_touch_filesystem() {
        let fs = MemoryFs::new();
        let files = Exporter::new(Namespaces::default())
            .with_filesystem(&fs)
            .preview(&sample_registry(), &test_target(), &out(), &ExportOptions::new())
            .unwrap();

        assert_eq!(files.len(), 3);
        assert_eq!(files[0].path, PathBuf::from("/out/user.ts"));
        assert_eq!(files[0].content, "standard App.DTO.User\n");
        assert!(fs.files().is_empty());
    }

    #[test]
    fn test_writes_to_disk() {
        let temp = tempfile::TempDir::new().unwrap();
        let summary = Exporter::new(Namespaces::default())
            .run(
                &sample_registry(),
                &test_target(),
                temp.path(),
                &ExportOptions::new(),
            )
            .unwrap();

        assert_eq!(summary.files.len(), 3);
        let input = temp.path().join("Billing/Input/createInvoiceInput.ts");
        assert_eq!(
            std::fs::read_to_string(input).unwrap(),
            "input App.DTO.Billing.Input.CreateInvoiceInput\n"
        );
    }
}
