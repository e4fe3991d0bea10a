pub mod audio_repository;
pub mod folder_repository;
pub mod google_translation_repository;
pub mod google_tts_repository;
pub mod openai_translation_repository;
pub mod openai_tts_repository;
pub mod polly_tts_repository;
pub mod text_batches;
pub mod translation_repository;
pub mod tts_repository;

pub use audio_repository::AudioRepository;
pub use folder_repository::FolderRepository;
pub use google_translation_repository::GoogleTranslationRepository;
pub use google_tts_repository::GoogleTtsRepository;
pub use openai_translation_repository::OpenAiTranslationRepository;
pub use openai_tts_repository::OpenAiTtsRepository;
pub use polly_tts_repository::PollyTtsRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
