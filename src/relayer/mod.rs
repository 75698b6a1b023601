/*!
   The relayer collaborator interface.
*/

pub mod driver;
