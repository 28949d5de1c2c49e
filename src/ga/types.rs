//! Core trait definitions for the GA framework.
//!
//! The two central traits — [`Individual`] and [`GaProblem`] — define the
//! contract between the generic GA engine and domain-specific problem
//! implementations.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Higher fitness is considered better (maximization).
///
/// Built-in implementations exist for `f64` and `f32`.
/// For minimization problems, negate the cost.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for initial/uninitialized individuals.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn worst() -> Self {
        f32::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry a cached fitness value. The GA framework calls
/// [`GaProblem::evaluate`] only for individuals whose cache is invalid,
/// then stores the result via [`set_fitness`](Individual::set_fitness).
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<usize>,
///     fitness: Option<f64>,
/// }
///
/// impl Individual for MySolution {
///     type Fitness = f64;
///     fn fitness(&self) -> f64 { self.fitness.unwrap_or(f64::NEG_INFINITY) }
///     fn set_fitness(&mut self, f: f64) { self.fitness = Some(f); }
///     fn invalidate(&mut self) { self.fitness = None; }
///     fn is_evaluated(&self) -> bool { self.fitness.is_some() }
/// }
/// ```
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    ///
    /// Unevaluated individuals report [`Fitness::worst`].
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    ///
    /// Called by the GA framework after evaluation.
    fn set_fitness(&mut self, fitness: Self::Fitness);

    /// Marks the cached fitness as stale.
    ///
    /// Called by the GA framework after crossover or mutation changed
    /// the genome.
    fn invalidate(&mut self);

    /// Whether the cached fitness is current.
    fn is_evaluated(&self) -> bool;
}

/// Defines a GA optimization problem.
///
/// This is the main trait that users implement to plug their domain-specific
/// logic into the generic GA framework. It covers:
///
/// 1. **Initialization**: How to create random individuals
/// 2. **Evaluation**: How to compute fitness
/// 3. **Crossover**: How to recombine two parents
/// 4. **Mutation**: How to perturb an individual
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the GA runner may evaluate
/// individuals in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    ///
    /// Called during population initialization. The returned individual
    /// must report `is_evaluated() == false`.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Must be a pure function of the genome: the runner may call it from
    /// several threads and relies on it drawing no randomness.
    ///
    /// Higher fitness values are considered better (maximization).
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two parents into one or two offspring.
    ///
    /// When two children are returned they replace both parents in the
    /// offspring pool; a single child replaces only the first parent.
    ///
    /// The default implementation returns clones of both parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone(), parent2.clone()]
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the current best fitness.
    ///
    /// Useful for adaptive parameter control or external communication.
    /// The default implementation is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
