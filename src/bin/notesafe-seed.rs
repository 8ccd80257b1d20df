//! Populate a NoteSafe database with the demo OOP notes.

use clap::Parser;
use notesafe::{models::note::CreateNoteRequest, Config, Database, NoteService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SEED_NOTES: &[(&str, &str)] = &[
    (
        "Definisi Class",
        "Class adalah blueprint atau cetakan untuk menciptakan objek (instance).",
    ),
    (
        "Definisi Object",
        "Object adalah hasil instansiasi dari class yang memiliki state dan behavior nyata.",
    ),
    (
        "Konsep Enkapsulasi",
        "Membungkus data (private) dan method menjadi satu unit, akses pakai getter/setter.",
    ),
    (
        "Inheritance (Pewarisan)",
        "Mewariskan atribut dan method dari Parent Class ke Child Class pakai keyword extends.",
    ),
    (
        "Polimorfisme",
        "Kemampuan objek untuk memiliki banyak bentuk, contohnya overriding dan overloading.",
    ),
    (
        "Method Overloading",
        "Membuat beberapa method dengan nama sama tapi beda parameter dalam satu class.",
    ),
    (
        "Method Overriding",
        "Menimpa ulang method milik parent class di child class agar perilakunya spesifik.",
    ),
    (
        "Constructor",
        "Method khusus yang otomatis dijalankan saat objek pertama kali dibuat (new).",
    ),
    (
        "Access Modifier Private",
        "Hanya bisa diakses di dalam class itu sendiri, tidak bisa dari luar.",
    ),
    (
        "Access Modifier Protected",
        "Bisa diakses oleh class itu sendiri dan class turunannya (subclass).",
    ),
    (
        "Keyword Super",
        "Digunakan untuk memanggil constructor atau method milik parent class.",
    ),
    (
        "Keyword This",
        "Merujuk pada instance objek yang sedang aktif saat ini.",
    ),
    (
        "Abstract Class",
        "Class setengah jadi yang tidak bisa diinstansiasi, harus diturunkan dulu.",
    ),
    (
        "Interface",
        "Kontrak yang berisi method kosong, class yang implement wajib isi semua methodnya.",
    ),
    (
        "Static Keyword",
        "Milik class bukan milik objek. Bisa dipanggil tanpa bikin object baru.",
    ),
    (
        "Final Keyword",
        "Membuat variabel jadi konstanta atau mencegah class untuk diwariskan.",
    ),
    (
        "UML Class Diagram",
        "Diagram visual buat gambarin struktur class dan relasi antar class.",
    ),
    (
        "Relasi Aggregation",
        "Hubungan \"has-a\" yang lemah, kalau container hancur, part-nya masih bisa hidup.",
    ),
    (
        "Relasi Composition",
        "Hubungan \"has-a\" yang kuat, kalau container hancur, part-nya ikut hancur.",
    ),
    (
        "Prinsip SOLID",
        "Single Responsibility, Open-Closed, Liskov, Interface Segregation, Dependency Inversion.",
    ),
];

#[derive(Parser)]
#[command(name = "notesafe-seed", about = "Seed NoteSafe with demo notes", version)]
struct Cli {
    /// Database directory (overrides DB_PATH)
    #[arg(long)]
    db_path: Option<String>,

    /// Print the notes that would be inserted without touching the database
    #[arg(long)]
    dry_run: bool,
}

fn seed_notes(service: &NoteService) -> anyhow::Result<usize> {
    for (title, content) in SEED_NOTES {
        let note = service.create(CreateNoteRequest {
            title: Some((*title).to_string()),
            content: Some((*content).to_string()),
        })?;
        tracing::debug!(id = note.id, title = %note.title, "Seeded note");
    }
    Ok(SEED_NOTES.len())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notesafe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(db_path) = cli.db_path {
        config.db_path = db_path;
    }

    if cli.dry_run {
        for (title, _) in SEED_NOTES {
            println!("{}", title);
        }
        tracing::info!(
            "Dry run: {} notes would be seeded into {}",
            SEED_NOTES.len(),
            config.db_path
        );
        return Ok(());
    }

    if config.uses_default_xor_key() {
        tracing::warn!("XOR_KEY is not set; seeded content uses the public default key");
    }

    let codec = config.codec()?;
    let database = Database::new(&config.db_path)?;
    let service = NoteService::new(database, codec);

    tracing::info!("Seeding demo notes into {}", config.db_path);
    let inserted = seed_notes(&service)?;
    tracing::info!("Seeding finished: {} notes added", inserted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{seed_notes, SEED_NOTES};
    use notesafe::{models::page::PageRequest, Database, NoteService, XorCodec};
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn seed_titles_are_unique_and_non_blank() {
        let titles: HashSet<&str> = SEED_NOTES.iter().map(|(title, _)| *title).collect();
        assert_eq!(titles.len(), 20);
        assert!(SEED_NOTES
            .iter()
            .all(|(title, content)| !title.trim().is_empty() && !content.trim().is_empty()));
    }

    #[test]
    fn seeding_inserts_every_note_through_the_service() {
        let temp_dir = TempDir::new().expect("temp dir");
        let db_path = temp_dir.path().join("db");
        let database = Database::new(db_path.to_str().expect("path")).expect("db");
        let service = NoteService::new(database, XorCodec::new("seed-key").expect("codec"));

        assert_eq!(seed_notes(&service).expect("seed"), 20);

        let page = service
            .list(PageRequest::new(1, 100), Some("blueprint"))
            .expect("search");
        assert_eq!(page.meta.total, 1);
        assert_eq!(page.data[0].title, "Definisi Class");
    }
}
