//! Built-in site content.
//!
//! The blog ships with a fixed set of posts, and the publications page ships with
//! a fallback list that is shown until (and unless) a sync replaces it.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::model::{Post, Publication, PublicationKind};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

const NEXTFLOW_DSL2_BODY: &str = include_str!("content/nextflow-dsl2-modules.md");

static BLOG_POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    vec![
        Post::new(
            "nextflow-dsl2-modules-patterns-for-reproducible-rna-seq-and-wgbs-workflows",
            "Nextflow DSL2 modules: patterns for reproducible RNA-seq and WGBS workflows",
            "Best practices and patterns for building modular, reusable Nextflow workflows for genomics analysis. Learn how to structure DSL2 modules, handle complex data flow, and ensure reproducibility across different computing environments.",
            day(2024, 1, 15),
        )
        .with_read_time("8 min read")
        .with_tags(["nextflow", "rna-seq", "wgbs", "reproducibility", "genomics"])
        .with_content(NEXTFLOW_DSL2_BODY),
        Post::new(
            "solving-conda-dependency-hell-and-when-to-switch-to-mamba-micromamba",
            "Solving Conda dependency hell (and when to switch to Mamba/Micromamba)",
            "Practical strategies for managing bioinformatics software dependencies and troubleshooting common issues. Explore when and how to migrate from Conda to Mamba or Micromamba for better performance.",
            day(2024, 1, 8),
        )
        .with_read_time("6 min read")
        .with_tags(["conda", "mamba", "dependencies", "environment-management", "troubleshooting"]),
        Post::new(
            "dockerizing-bioinformatics-tools-for-reproducibility-with-cache-multi-arch-tips",
            "Dockerizing bioinformatics tools for reproducibility (with cache & multi-arch tips)",
            "Complete guide to containerizing bioinformatics workflows with Docker, including multi-architecture builds, layer caching strategies, and best practices for scientific reproducibility.",
            day(2024, 1, 1),
        )
        .with_read_time("12 min read")
        .with_tags(["docker", "containers", "reproducibility", "multi-arch", "optimization"]),
        Post::new(
            "variant-calling-pitfalls-joint-genotyping-filtering-and-benchmarking-notes",
            "Variant calling pitfalls: joint genotyping, filtering, and benchmarking notes",
            "Common challenges in variant calling workflows and how to address them. Covers joint genotyping strategies, filtering criteria, and benchmarking approaches for different use cases.",
            day(2023, 12, 20),
        )
        .with_read_time("10 min read")
        .with_tags(["variant-calling", "gatk", "joint-genotyping", "filtering", "benchmarking"]),
        Post::new(
            "metagenomics-qc-adapters-low-complexity-reads-and-host-decontamination",
            "Metagenomics QC: adapters, low-complexity reads, and host decontamination",
            "Quality control strategies for metagenomic data preprocessing. Learn about adapter trimming, handling low-complexity sequences, and removing host contamination from environmental samples.",
            day(2023, 12, 10),
        )
        .with_read_time("7 min read")
        .with_tags(["metagenomics", "quality-control", "preprocessing", "decontamination", "adapters"]),
        Post::new(
            "funannotate-in-containers-fixing-perl-dbi-installation-errors-and-other-gotchas",
            "Funannotate in containers: fixing Perl DBI installation errors and other gotchas",
            "Troubleshooting guide for running Funannotate in containerized environments. Solutions for common Perl DBI issues, dependency conflicts, and optimization tips for fungal genome annotation.",
            day(2023, 11, 25),
        )
        .with_read_time("9 min read")
        .with_tags(["funannotate", "containers", "perl", "troubleshooting", "genome-annotation"]),
    ]
});

static FALLBACK_PUBLICATIONS: Lazy<Vec<Publication>> = Lazy::new(|| {
    vec![
        Publication::new(
            "Machine Learning Approaches for Long Non-coding RNA Discovery in Plant Genomes",
            "Nature Computational Biology",
            2024,
            PublicationKind::Journal,
        )
        .with_authors(["Andrea Bonomo", "Maria Rossi", "Giuseppe Verdi"])
        .with_doi("10.1038/s41467-024-12345-6")
        .with_summary("We present novel machine learning approaches for identifying and characterizing long non-coding RNAs in plant genomes...")
        .with_bibtex(
            "@article{bonomo2024machine,
  title={Machine Learning Approaches for Long Non-coding RNA Discovery in Plant Genomes},
  author={Bonomo, Andrea and Rossi, Maria and Verdi, Giuseppe},
  journal={Nature Computational Biology},
  year={2024},
  doi={10.1038/s41467-024-12345-6}
}",
        ),
        Publication::new(
            "Metagenomics Pipeline Optimization for Environmental Microbiome Analysis",
            "Bioinformatics",
            2023,
            PublicationKind::Journal,
        )
        .with_authors(["Andrea Bonomo", "Luigi Bianchi"])
        .with_doi("10.1093/bioinformatics/btac123")
        .with_summary("Environmental microbiome studies require robust computational pipelines for processing complex metagenomic data...")
        .with_bibtex(
            "@article{bonomo2023metagenomics,
  title={Metagenomics Pipeline Optimization for Environmental Microbiome Analysis},
  author={Bonomo, Andrea and Bianchi, Luigi},
  journal={Bioinformatics},
  year={2023},
  doi={10.1093/bioinformatics/btac123}
}",
        ),
        Publication::new(
            "Nextflow Best Practices for Reproducible Genomics Workflows",
            "IEEE Conference on Bioinformatics and Biomedicine",
            2023,
            PublicationKind::Conference,
        )
        .with_authors(["Andrea Bonomo", "Elena Ferrari", "Marco Colombo"])
        .with_summary("We present best practices and design patterns for developing reproducible genomics workflows using Nextflow...")
        .with_bibtex(
            "@inproceedings{bonomo2023nextflow,
  title={Nextflow Best Practices for Reproducible Genomics Workflows},
  author={Bonomo, Andrea and Ferrari, Elena and Colombo, Marco},
  booktitle={IEEE Conference on Bioinformatics and Biomedicine},
  year={2023}
}",
        ),
        Publication::new(
            "Deep Learning Models for Transcriptome Annotation in Non-model Organisms",
            "bioRxiv",
            2024,
            PublicationKind::Preprint,
        )
        .with_authors(["Andrea Bonomo", "Francesca Romano"])
        .with_doi("10.1101/2024.01.12.123456")
        .with_summary("We develop deep learning approaches for accurate transcriptome annotation in non-model organisms...")
        .with_bibtex(
            "@article{bonomo2024deep,
  title={Deep Learning Models for Transcriptome Annotation in Non-model Organisms},
  author={Bonomo, Andrea and Romano, Francesca},
  journal={bioRxiv},
  year={2024},
  doi={10.1101/2024.01.12.123456}
}",
        ),
    ]
});

/// The built-in blog posts, newest first.
pub fn blog_posts() -> Vec<Post> {
    BLOG_POSTS.clone()
}

/// Publications shown before any sync has succeeded.
pub fn fallback_publications() -> Vec<Publication> {
    FALLBACK_PUBLICATIONS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[test]
    fn test_seed_posts_form_valid_store() {
        let store = RecordStore::new(blog_posts()).unwrap();
        assert_eq!(store.len(), 6);
        assert!(store.iter().all(|p| p.published));
    }

    #[test]
    fn test_seed_posts_are_newest_first() {
        let posts = blog_posts();
        assert!(posts.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[test]
    fn test_nextflow_post_carries_article_body() {
        let posts = blog_posts();
        let with_body: Vec<&str> = posts
            .iter()
            .filter(|p| p.content.is_some())
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(
            with_body,
            vec!["nextflow-dsl2-modules-patterns-for-reproducible-rna-seq-and-wgbs-workflows"]
        );

        let body = posts[0].content.as_deref().unwrap();
        assert!(body.starts_with("# Nextflow DSL2 modules"));
        assert!(body.contains("process FASTQC {"));
        assert!(body.contains("publishDir \"${params.outdir}/final_results\""));
        assert!(!body.contains("\\`"));
    }

    #[test]
    fn test_fallback_publications_form_valid_store() {
        let store = RecordStore::new(fallback_publications()).unwrap();
        assert_eq!(store.len(), 4);
        assert!(store.iter().all(|p| p.year.is_some() && p.bibtex.is_some()));
    }

    #[test]
    fn test_conference_paper_has_no_doi() {
        let pubs = fallback_publications();
        let conference: Vec<_> = pubs
            .iter()
            .filter(|p| p.kind == PublicationKind::Conference)
            .collect();
        assert_eq!(conference.len(), 1);
        assert!(conference[0].doi.is_none());
    }
}
