#![no_main]

use lambda_bundler::domain::entities::SourceDocument;
use lambda_bundler::domain::ports::{ArtifactAssembler, MarkerValidator, SectionExtractor};
use lambda_bundler::domain::value_objects::DocumentKind;
use lambda_bundler::{BundlePipeline, PipelineSettings};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let Ok(pipeline) = BundlePipeline::new(&PipelineSettings::default()) else {
            return;
        };
        let document = SourceDocument::new("fuzz.py", content);
        let _ = pipeline.validator.validate(&document, DocumentKind::Function);
        let extracted = pipeline.extractor.extract(&document);
        // Assembling a document with itself exercises the merger and self-check
        let text = pipeline.assembler.assemble(&extracted, &extracted);
        let _ = pipeline.self_check.check(&text);
    }
});
