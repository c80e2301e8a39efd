// End-to-end tests for the VoiceLab client.
//
// Each test stands up a wiremock double for the generation endpoint and
// drives the real handler against it through a recording view, asserting
// the observable UI lifecycle: busy state, result bindings, alerts and
// cleanup.
//
// Tests run in parallel; every test owns its own mock server and view.

mod helpers;
