mod sizing_scenarios;
