use crate::error::HumanizeResult;
use crate::lexicon::Lexicon;
use super::ending::EndingRules;
use super::noise::FillerSet;
use super::repair::GrammarRepair;

/// Every read-only table the pipeline consults.
///
/// Built once at startup and shared by reference between requests.
#[derive(Debug, Clone)]
pub struct RuleTables {
	/// Stiff → casual vocabulary.
	pub lexicon: Lexicon,

	/// Candidate filler phrases.
	pub fillers: FillerSet,

	/// Sentence ending rewrites, in priority order.
	pub endings: EndingRules,

	/// Grammar repair rewrites, in application order.
	pub repairs: GrammarRepair,
}

impl RuleTables {
	/// Bundles `lexicon` with the built-in fillers, endings and repairs.
	///
	/// # Errors
	/// Returns an error if a built-in pattern fails to compile.
	pub fn standard(lexicon: Lexicon) -> HumanizeResult<Self> {
		Ok(Self {
			lexicon,
			fillers: FillerSet::default(),
			endings: EndingRules::standard()?,
			repairs: GrammarRepair::standard()?,
		})
	}

	/// Replaces the filler set (e.g. from configuration).
	pub fn with_fillers(mut self, fillers: FillerSet) -> Self {
		self.fillers = fillers;
		self
	}
}
