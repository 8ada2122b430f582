//! Generic hive mind sensor — per-bot кэш одного факта
//!
//! Сенсоры отличаются только вопросом, который задаётся каждому боту.
//! Вопрос передаётся как closure в `refresh`, кэширование общее.
//!
//! Pull model: значения обновляются только явным `refresh`, никакого
//! неявного per-frame тика. Cadence выбирает потребитель.

use bevy::prelude::*;
use std::collections::HashMap;

/// Кэш факта `V` для каждого отслеживаемого бота
///
/// Отсутствие записи = "ни разу не вычислялось", это не то же самое что
/// отрицательное значение (см. `reading`).
#[derive(Debug, Clone)]
pub struct HiveMindSensor<V> {
    default_value: V,
    readings: HashMap<Entity, V>,
    refresh_count: u64,
}

impl<V: Clone> HiveMindSensor<V> {
    pub fn new(default_value: V) -> Self {
        Self {
            default_value,
            readings: HashMap::new(),
            refresh_count: 0,
        }
    }

    /// Fallback для неизвестных ботов и ботов без подсистемы
    pub fn default_value(&self) -> &V {
        &self.default_value
    }

    /// Последнее закэшированное значение или `default_value`
    pub fn query(&self, bot: Entity) -> V {
        self.readings
            .get(&bot)
            .cloned()
            .unwrap_or_else(|| self.default_value.clone())
    }

    /// Закэшированное значение без fallback (None = ни разу не вычислялось)
    pub fn reading(&self, bot: Entity) -> Option<&V> {
        self.readings.get(&bot)
    }

    pub fn refresh<I, E>(&mut self, bots: I, evaluate: E)
    where
        I: IntoIterator<Item = Entity>,
        E: FnMut(Entity) -> Option<V>,
    {
        self.refresh_with(bots, evaluate, |_| {});
    }

    /// Пересчитывает факт для каждого бота из `bots`
    ///
    /// `evaluate` возвращает None, если состояние бота нельзя получить
    /// (подсистема ещё не создана) — тогда пишется `default_value`.
    /// `extra_action` вызывается ровно один раз на бота за refresh.
    ///
    /// Новый кэш собирается целиком и подменяет старый одним присваиванием:
    /// читатель никогда не видит наполовину обновлённый кэш. Боты, которых
    /// host перестал передавать, после refresh отдают `default_value`.
    pub fn refresh_with<I, E, A>(&mut self, bots: I, mut evaluate: E, mut extra_action: A)
    where
        I: IntoIterator<Item = Entity>,
        E: FnMut(Entity) -> Option<V>,
        A: FnMut(Entity),
    {
        let mut next = HashMap::with_capacity(self.readings.len());

        for bot in bots {
            // Дубликаты в tracked set считаем одним ботом
            if next.contains_key(&bot) {
                continue;
            }

            let value = evaluate(bot).unwrap_or_else(|| self.default_value.clone());
            next.insert(bot, value);
            extra_action(bot);
        }

        self.readings = next;
        self.refresh_count += 1;
    }

    /// Сколько ботов попало в последний refresh
    pub fn tracked_count(&self) -> usize {
        self.readings.len()
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &V)> {
        self.readings.iter().map(|(bot, value)| (*bot, value))
    }
}

impl<V: Clone + Default> Default for HiveMindSensor<V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}
