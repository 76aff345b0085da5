use crate::domain::model::Client;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const FIRST_NAMES: &[&str] = &[
    "Алексей",
    "Мария",
    "Дмитрий",
    "Елена",
    "Сергей",
    "Анна",
    "Иван",
    "Ольга",
    "Максим",
    "Екатерина",
];

pub const LAST_NAMES: &[&str] = &[
    "Иванов",
    "Петрова",
    "Соколов",
    "Смирнова",
    "Волков",
    "Новикова",
    "Федоров",
    "Морозова",
    "Кузнецов",
    "Попова",
];

pub const COMPANIES: &[&str] = &[
    "ТехноСтарт",
    "Ритейл Про",
    "Финансовые Решения",
    "МедТех Инновации",
    "ЭкоСтрой",
    "ЦифроМаркет",
    "БизнесПро",
    "ИТ Системы",
    "Логистика 24",
    "Авто Плюс",
    "Красота и Здоровье",
    "Фитнес Клуб",
    "Кафе \"Уют\"",
    "Строй Мастер",
    "Детский мир",
    "Модный Дом",
];

pub const INDUSTRIES: &[&str] = &[
    "IT-стартапы",
    "Розничная торговля",
    "Финансы",
    "Медицинские технологии",
    "Строительство",
    "E-commerce",
    "Логистика",
    "Производство",
    "Красота и здоровье",
    "Образование",
    "Недвижимость",
    "Общепит",
    "Фитнес",
    "Услуги",
];

pub const SOURCES: &[&str] = &[
    "LinkedIn",
    "HeadHunter",
    "Habr Career",
    "VC.ru",
    "Telegram",
    "Avito",
    "Яндекс.Услуги",
    "Профи.ру",
];

pub const NEED_PHRASES: &[&str] = &[
    "Создать сайт",
    "Разработать сайт",
    "Сделать сайт-визитку",
    "Лендинг под ключ",
    "Интернет-магазин",
    "Онлайн-магазин",
    "Создать интернет-магазин",
    "Создать бота",
    "Telegram бот",
    "Разработать бота",
    "Чат-бот для бизнеса",
    "Отредактировать фото",
    "Обработать фото",
    "Ретушь фото",
    "Оживить фото",
    "Восстановить старое фото",
    "Улучшить качество фото",
    "Создать логотип",
    "Разработать фирменный стиль",
    "Дизайн логотипа",
    "Настроить рекламу",
    "Контекстная реклама",
    "Реклама в Яндекс",
    "SMM продвижение",
    "Ведение соцсетей",
    "Контент для Instagram",
    "Мобильное приложение",
    "Разработать приложение",
    "iOS приложение",
    "CRM-система",
    "Автоматизация бизнеса",
    "Внедрить CRM",
    "SEO продвижение",
    "Продвижение сайта",
    "Поднять в поиске",
    "Email-рассылка",
    "Настроить рассылки",
    "Email-маркетинг",
    "1C настройка",
    "1C интеграция",
    "Доработать 1C",
    "Видеомонтаж",
    "Смонтировать видео",
    "Создать видеоролик",
    "Написать тексты",
    "Копирайтинг",
    "Тексты для сайта",
    "Настроить аналитику",
    "Яндекс.Метрика",
    "Google Analytics",
];

const ID_FLOOR: usize = 1000;
const ID_CEIL: usize = 9999;

/// Generated scores never exceed this.
pub const SCORE_CEIL: u8 = 98;

/// RNG for a discovery run. A fixed seed reproduces the batch exactly.
pub fn batch_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fabricates `count` fresh leads with ids `client_1000`..`client_9999`.
///
/// Ids within one batch are distinct, so `count` is capped at the id-space
/// size. Scores land in `[min_score, 98]`; each lead carries one to three
/// distinct needs and a discovery timestamp.
pub fn generate<R: Rng>(rng: &mut R, count: usize, min_score: u8) -> Vec<Client> {
    let id_span = ID_CEIL - ID_FLOOR + 1;
    let count = count.min(id_span);
    let score_floor = min_score.min(SCORE_CEIL);

    let ids = rand::seq::index::sample(rng, id_span, count);

    ids.iter()
        .map(|offset| {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let company = COMPANIES[rng.gen_range(0..COMPANIES.len())];
            let industry = INDUSTRIES[rng.gen_range(0..INDUSTRIES.len())];

            let needs_count = rng.gen_range(1..=3);
            let needs = rand::seq::index::sample(rng, NEED_PHRASES.len(), needs_count)
                .iter()
                .map(|i| NEED_PHRASES[i].to_string())
                .collect();

            Client {
                id: format!("client_{}", ID_FLOOR + offset),
                name: format!("{first} {last}"),
                company: company.to_string(),
                industry: industry.to_string(),
                needs,
                score: rng.gen_range(score_floor..=SCORE_CEIL),
                contact: format!("contact@company{}.ru", rng.gen_range(1..=100)),
                source: SOURCES[rng.gen_range(0..SOURCES.len())].to_string(),
                found_at: Some(Utc::now()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_seed_reproduces_the_batch() {
        let a = generate(&mut batch_rng(Some(42)), 12, 70);
        let b = generate(&mut batch_rng(Some(42)), 12, 70);

        assert_eq!(a.len(), b.len());
        for (lead_a, lead_b) in a.iter().zip(&b) {
            // foundAt is wall-clock, everything else must agree.
            assert_eq!(lead_a.id, lead_b.id);
            assert_eq!(lead_a.name, lead_b.name);
            assert_eq!(lead_a.company, lead_b.company);
            assert_eq!(lead_a.industry, lead_b.industry);
            assert_eq!(lead_a.needs, lead_b.needs);
            assert_eq!(lead_a.score, lead_b.score);
            assert_eq!(lead_a.contact, lead_b.contact);
            assert_eq!(lead_a.source, lead_b.source);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = generate(&mut batch_rng(Some(1)), 10, 70);
        let b = generate(&mut batch_rng(Some(2)), 10, 70);
        assert_ne!(
            a.iter().map(|c| c.id.clone()).collect::<Vec<_>>(),
            b.iter().map(|c| c.id.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn ids_are_distinct_and_in_range() {
        let batch = generate(&mut batch_rng(Some(7)), 200, 70);
        assert_eq!(batch.len(), 200);

        let mut seen = HashSet::new();
        for lead in &batch {
            let number: usize = lead
                .id
                .strip_prefix("client_")
                .and_then(|n| n.parse().ok())
                .unwrap();
            assert!((1000..=9999).contains(&number), "id out of range: {number}");
            assert!(seen.insert(number), "duplicate id {number}");
        }
    }

    #[test]
    fn fields_come_from_the_pools() {
        let batch = generate(&mut batch_rng(Some(9)), 50, 70);

        for lead in &batch {
            let (first, last) = lead.name.split_once(' ').unwrap();
            assert!(FIRST_NAMES.contains(&first));
            assert!(LAST_NAMES.contains(&last));
            assert!(COMPANIES.contains(&lead.company.as_str()));
            assert!(INDUSTRIES.contains(&lead.industry.as_str()));
            assert!(SOURCES.contains(&lead.source.as_str()));
            assert!(lead.found_at.is_some());

            assert!((1..=3).contains(&lead.needs.len()));
            let distinct: HashSet<&str> = lead.needs.iter().map(String::as_str).collect();
            assert_eq!(distinct.len(), lead.needs.len());
            for need in &lead.needs {
                assert!(NEED_PHRASES.contains(&need.as_str()));
            }

            let middle = lead
                .contact
                .strip_prefix("contact@company")
                .and_then(|s| s.strip_suffix(".ru"))
                .unwrap();
            let company_number: u32 = middle.parse().unwrap();
            assert!((1..=100).contains(&company_number));
        }
    }

    #[test]
    fn scores_respect_the_floor_and_ceiling() {
        let batch = generate(&mut batch_rng(Some(11)), 100, 85);
        assert!(batch.iter().all(|c| c.score >= 85 && c.score <= SCORE_CEIL));

        let pinned = generate(&mut batch_rng(Some(11)), 20, SCORE_CEIL);
        assert!(pinned.iter().all(|c| c.score == SCORE_CEIL));
    }

    #[test]
    fn oversized_count_is_capped_at_the_id_space() {
        let batch = generate(&mut batch_rng(Some(3)), 10_000, 70);
        assert_eq!(batch.len(), 9000);
    }

    #[test]
    fn need_pool_has_no_duplicates() {
        let distinct: HashSet<&str> = NEED_PHRASES.iter().copied().collect();
        assert_eq!(distinct.len(), NEED_PHRASES.len());
        assert_eq!(NEED_PHRASES.len(), 50);
    }
}
