//! Elitist memory of the best individuals seen during a run.

use super::types::Individual;

/// The best individuals observed across all generations, fittest first.
///
/// Members survive independently of the current population, so a champion
/// that is lost to crossover or mutation is still returned at the end.
#[derive(Debug, Clone)]
pub struct HallOfFame<I: Individual> {
    capacity: usize,
    members: Vec<I>,
}

impl<I: Individual> HallOfFame<I> {
    /// Creates an empty hall of fame holding at most `capacity` members.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            members: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Offers every evaluated individual of `population`.
    ///
    /// Returns `true` if the champion changed.
    pub fn update(&mut self, population: &[I]) -> bool {
        let before = self.best().map(|b| b.fitness());
        for ind in population.iter().filter(|ind| ind.is_evaluated()) {
            self.offer(ind);
        }
        match (before, self.best()) {
            (None, Some(_)) => true,
            (Some(old), Some(new)) => new.fitness() > old,
            _ => false,
        }
    }

    /// Inserts `ind` if the hall is not full or it strictly beats the
    /// weakest member.
    fn offer(&mut self, ind: &I) {
        let fitness = ind.fitness();
        if self.members.len() == self.capacity {
            match self.members.last() {
                Some(worst) if fitness > worst.fitness() => {
                    self.members.pop();
                }
                _ => return,
            }
        }
        let pos = self
            .members
            .iter()
            .position(|m| fitness > m.fitness())
            .unwrap_or(self.members.len());
        self.members.insert(pos, ind.clone());
    }

    /// The champion, if any individual has been offered.
    pub fn best(&self) -> Option<&I> {
        self.members.first()
    }

    /// All members, fittest first.
    pub fn members(&self) -> &[I] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Consumes the hall and returns its champion.
    pub fn into_best(self) -> Option<I> {
        self.members.into_iter().next()
    }
}
